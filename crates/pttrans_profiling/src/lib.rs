//! Utilities for running benchmarks, either under `criterion` or for a fixed
//! duration under an external profiler.

pub mod benchmark;
