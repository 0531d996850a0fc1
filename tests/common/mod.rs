#![allow(dead_code)] // not every harness uses every helper
//! Shared test utilities for loglens integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
