//! Error collection application layer

mod collector;
mod summary;

pub use collector::ErrorCollector;
