//! Point batches, rigid transforms and the strategies for applying the latter
//! to the former.

pub mod config;
pub mod num;
pub mod point;
pub mod random;
pub mod strategy;
pub mod transform;

pub use num::Float;
