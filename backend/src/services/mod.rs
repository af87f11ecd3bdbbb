//! Business logic services for the prediction server

pub mod prediction;

pub use prediction::{PredictionService, YieldPredictor};
