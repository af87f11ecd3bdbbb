//! Domain models for crop yield prediction

mod form;
mod prediction;

pub use form::*;
pub use prediction::*;
