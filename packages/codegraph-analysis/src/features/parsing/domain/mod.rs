//! Parsing domain models

mod entities;

pub use entities::{
    ClassEntity, FunctionEntity, ImportEntity, Parameter, ParameterKind, StructuralEntities,
};
