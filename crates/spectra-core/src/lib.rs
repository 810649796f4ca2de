//! spectra-core
//!
//! Pure domain types and screening-code helpers.
//! No I/O — this is the shared vocabulary of the Spectra system.

pub mod code;
pub mod error;
pub mod models;
