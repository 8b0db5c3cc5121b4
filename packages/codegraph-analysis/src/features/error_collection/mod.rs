//! Error Collection Feature
//!
//! Turns raw failures into typed, retry-annotated records and keeps the
//! run's statistics.
//!
//! ## Structure
//! - `domain/` - ErrorType (ordered classifier), ErrorRecord, ErrorContext, RunStatistics
//! - `application/` - ErrorCollector (log, count, summarize)
//! - `infrastructure/` - JSON report export
//!
//! A collector is an ordinary value owned by the caller; concurrent batch
//! drivers must serialize access to it themselves.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ErrorCollector;
pub use domain::{ErrorContext, ErrorRecord, ErrorType, RunStatistics};
pub use infrastructure::ErrorReport;
