//! Business logic services for the Crop Rotation Planner

pub mod planner;

pub use planner::PlannerService;
