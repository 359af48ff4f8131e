//! HTTP handlers for the Crop Rotation Planner

pub mod health;
pub mod planner;

pub use health::*;
pub use planner::*;
