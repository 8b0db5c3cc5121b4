//! Common test utilities for codegraph-analysis
//!
//! Fixture sources and a temp-dir workspace that turns them into
//! `FileRecord`s.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
