//! HTTP handlers for the prediction server

pub mod health;
pub mod predict;

pub use health::{api_test, health_check};
pub use predict::predict;
