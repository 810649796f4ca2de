//! spectra-screening
//!
//! Workflow composition: wires validation, prediction resolution, and
//! persistence into the two user-facing flows. Ownership scoping is an
//! explicit `user_id` parameter on every flow; there is no ambient
//! session state.

pub mod error;
pub mod flow;

pub use flow::{complete_classification, submit_screening};
