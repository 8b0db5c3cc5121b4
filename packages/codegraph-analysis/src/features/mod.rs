//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (as needed):
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

// Size and wall-clock limits around parsing
pub mod resource_guard;

// CST parsing and structural extraction
pub mod parsing;

// Failure taxonomy, run statistics, JSON report
pub mod error_collection;
