//! Parsing application layer

mod extract_structure;

pub use extract_structure::{Extraction, StructureExtractor};
