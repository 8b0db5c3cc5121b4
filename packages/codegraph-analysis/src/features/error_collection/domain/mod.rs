//! Error collection domain models

mod error_type;
mod record;

pub use error_type::ErrorType;
pub use record::{ErrorContext, ErrorRecord, RunStatistics};
