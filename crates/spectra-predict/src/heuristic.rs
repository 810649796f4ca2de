//! Deterministic majority-threshold fallback.

use spectra_core::models::outcome::{Prediction, PredictionOutcome, PredictionSource};
use spectra_core::models::population::Population;
use spectra_core::models::responses::ScreeningResponses;

use spectra_instruments::questionnaire_for;

/// Predict locally by counting yes answers against the population's
/// threshold: adult 6 of 10, toddler 3 of 10 (the toddler instrument
/// screens more sensitively). No confidence is reported; the heuristic is
/// a coarse majority vote, not a calibrated model.
pub fn fallback_prediction(
    population: Population,
    responses: &ScreeningResponses,
) -> PredictionOutcome {
    let yes_count = responses.yes_count();
    let threshold = questionnaire_for(population).screening_threshold();

    let value = if yes_count >= threshold {
        Prediction::Yes
    } else {
        Prediction::No
    };

    PredictionOutcome {
        value,
        confidence: None,
        source: PredictionSource::Fallback,
    }
}
