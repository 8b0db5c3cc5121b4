//! Parsing Feature
//!
//! Responsible for turning source text into structural entities, even when
//! the text does not fully parse.
//!
//! ## Structure
//! - `domain/` - FunctionEntity, ClassEntity, ImportEntity, StructuralEntities
//! - `ports/` - Parser trait
//! - `application/` - StructureExtractor (validate, walk, errors, complexity, lines)
//! - `infrastructure/` - TreeSitterParser, per-construct extractors

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{Extraction, StructureExtractor};
pub use domain::{
    ClassEntity, FunctionEntity, ImportEntity, Parameter, ParameterKind, StructuralEntities,
};
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
