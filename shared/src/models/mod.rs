//! Domain models for the Crop Rotation Planner

mod allocation;
mod crop;
mod metrics;

pub use allocation::*;
pub use crop::*;
pub use metrics::*;
