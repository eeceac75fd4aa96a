//! Benchmarks.

pub mod transformation;
