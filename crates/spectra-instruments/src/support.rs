//! Support-level scoring over the classification questionnaire.

use spectra_core::models::answer::Answer;
use spectra_core::models::classification::{ClassificationResult, SupportLevel, TraitProfile};
use spectra_core::models::outcome::Prediction;
use spectra_core::models::responses::ClassificationResponses;

use crate::error::InstrumentError;
use crate::Questionnaire;

/// Score a complete set of classification answers.
///
/// Only meaningful after a positive screening prediction; a negative one is
/// rejected rather than scored. The tier comes from the yes-count (4+ →
/// Level 3, 2–3 → Level 2, 0–1 → Level 1) and the trait profile is derived
/// deterministically from the same answers.
pub fn classify(
    prediction: Prediction,
    questionnaire: &dyn Questionnaire,
    responses: &ClassificationResponses,
) -> Result<ClassificationResult, InstrumentError> {
    if !prediction.is_positive() {
        return Err(InstrumentError::NotScreenedPositive);
    }

    let yes_count = responses.yes_count();
    let level = SupportLevel::from_yes_count(yes_count);

    let labels = questionnaire
        .trait_axes()
        .iter()
        .map(|axis| axis.to_string())
        .collect();
    let values = responses
        .answers()
        .iter()
        .map(|answer| trait_value(*answer, yes_count))
        .collect();

    Ok(ClassificationResult {
        level,
        profile: TraitProfile { labels, values },
    })
}

/// Axis value for one answer: an unflagged axis sits at the floor, a
/// flagged one scales with the overall yes-count, capped at 5.
fn trait_value(answer: Answer, total_yes: usize) -> u8 {
    if answer.is_yes() {
        (1 + total_yes).min(5) as u8
    } else {
        1
    }
}
