//! Node extractors - extract structural entities from tree-sitter nodes

pub mod class;
pub mod complexity;
pub mod function;
pub mod import;
pub mod parameter;
pub mod variable;

pub use class::extract_class;
pub use complexity::compute_complexity;
pub use function::{extract_function, unwrap_decorated};
pub use import::{extract_import_from_statement, extract_import_statement};
pub use parameter::extract_parameters;
pub use variable::{assignment_target_names, statement_assignments, self_attribute_target};
