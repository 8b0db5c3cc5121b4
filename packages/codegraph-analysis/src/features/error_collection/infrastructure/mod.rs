//! Report export adapters

mod json_report;

pub use json_report::{read_report, write_report, ErrorReport};
