//! spritebake CLI library.
//!
//! This crate provides the batch-conversion machinery behind the `spritebake`
//! binary: input discovery and checking, the bounded parallel batch driver,
//! and machine-readable output types for the `--json` flag.

pub mod batch;
pub mod input;
pub mod json_output;
