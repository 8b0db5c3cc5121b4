//! Pipeline orchestration
//!
//! `AnalysisOrchestrator::analyze_file` is the single entry point: it runs the
//! guard checks and the extractor in order, derives the result status and
//! routes failures to the caller's `ErrorCollector`.

pub mod orchestrator;
pub mod result;

pub use orchestrator::{AnalysisOrchestrator, ENCODING_ISSUES, PARSE_ERRORS_DETECTED};
pub use result::{AnalysisResult, AnalysisStatus};
