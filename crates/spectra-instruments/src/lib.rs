//! spectra-instruments
//!
//! Screening questionnaire definitions. Pure data — no I/O.
//! Defines the question sets, fallback thresholds, trait axes, and
//! support-level scoring rules for each screened population.

pub mod error;
pub mod questionnaires;
pub mod submission;
pub mod support;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use spectra_core::models::population::Population;

/// One yes/no question, identified by its fixed key (`A1`..`A10` for
/// screening, `Q1`..`Q5` for classification).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub key: String,
    pub text: String,
}

/// Trait implemented by each population's questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier for this questionnaire (e.g., "aq10").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "AQ-10").
    fn name(&self) -> &str;

    /// The population this questionnaire screens.
    fn population(&self) -> Population;

    /// The ten screening questions, in order.
    fn screening_questions(&self) -> &[Question];

    /// The five classification questions, in order.
    fn classification_questions(&self) -> &[Question];

    /// Yes-count at or above which the fallback heuristic screens positive.
    fn screening_threshold(&self) -> usize;

    /// Axis labels for the five-dimension trait profile.
    fn trait_axes(&self) -> [&'static str; 5];

    /// Result phrasing for a positive prediction.
    fn positive_headline(&self) -> &str {
        "Autism Traits Detected"
    }

    /// Result phrasing for a negative prediction.
    fn negative_headline(&self) -> &str {
        "No Significant Autism Traits Detected"
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::aq10::Aq10),
        Box::new(questionnaires::qchat10::QChat10),
    ]
}

/// Look up the questionnaire for a population.
pub fn questionnaire_for(population: Population) -> Box<dyn Questionnaire> {
    match population {
        Population::Adult => Box::new(questionnaires::aq10::Aq10),
        Population::Toddler => Box::new(questionnaires::qchat10::QChat10),
    }
}
