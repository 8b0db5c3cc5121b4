//! Shared models

mod error;
mod file_record;
mod language;
mod span;

pub use error::{AnalysisError, Result};
pub use file_record::FileRecord;
pub use language::Language;
pub use span::Span;
