pub mod config;
pub mod error;
pub mod geometry;
pub mod grain;
pub mod math;
pub mod metrics;
pub mod operations;
pub mod simulation;
pub mod tessellation;

pub use error::{GrainError, Result};
