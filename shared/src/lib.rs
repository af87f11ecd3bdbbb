//! Shared types and models for the crop yield prediction service
//!
//! This crate contains types shared between the backend, the browser form
//! controller (via WASM), and the validation rules both of them apply.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
