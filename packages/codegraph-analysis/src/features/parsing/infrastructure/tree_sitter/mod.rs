//! Tree-sitter adapter

mod diagnostics;
mod parser;

pub use diagnostics::count_error_nodes;
pub use parser::TreeSitterParser;
