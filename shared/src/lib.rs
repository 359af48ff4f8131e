//! Shared types and planning logic for the Crop Rotation Planner
//!
//! This crate contains the crop models, the profitability calculator and the
//! rotation optimizer used by the backend, the frontend (via WASM), and any
//! other component that needs to plan a season.

pub mod catalog;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use error::*;
pub use models::*;
pub use optimizer::*;
pub use types::*;
pub use validation::*;
