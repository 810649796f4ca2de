//! spectra-predict
//!
//! Prediction resolution: remote inference service first, deterministic
//! local heuristic when the service is unreachable, slow, or malformed.
//! The caller always gets an outcome, tagged with where it came from.

pub mod client;
pub mod error;
pub mod heuristic;

pub use client::PredictionService;
pub use heuristic::fallback_prediction;
