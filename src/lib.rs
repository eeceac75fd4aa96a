//! Benchmark comparing two ways of applying a rigid transform to a large
//! batch of 3D points: one batched matrix product and a per-point loop.

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use pttrans_math;
