//! CLI command implementations.

pub mod seed;
