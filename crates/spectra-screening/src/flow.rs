//! The two user-facing flows: initial screening submission and the later
//! classification pass.
//!
//! Persistence never blocks a result: if the store fails, the error is
//! logged and the caller still receives the just-computed outcome, with
//! `record: None` marking that nothing was saved.

use std::collections::BTreeMap;

use tracing::{info, warn};
use uuid::Uuid;

use spectra_core::code;
use spectra_core::models::answer::Answer;
use spectra_core::models::classification::ClassificationResult;
use spectra_core::models::outcome::PredictionOutcome;
use spectra_core::models::population::Population;
use spectra_core::models::record::ScreeningRecord;
use spectra_instruments::questionnaire_for;
use spectra_instruments::submission::{validate_classification, validate_screening, ScreeningSubmission};
use spectra_instruments::support::classify;
use spectra_predict::PredictionService;
use spectra_records::store::{ClassificationUpdate, NewScreening, ScreeningStore};

use crate::error::FlowError;

/// What the submitter sees immediately after a screening is processed.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub outcome: PredictionOutcome,
    pub screening_code: String,
    /// The persisted row; absent when persistence failed.
    pub record: Option<ScreeningRecord>,
}

/// Validate, resolve, and persist one screening submission.
///
/// Validation failure blocks the flow with nothing persisted. Once the
/// answers are complete, a prediction is always produced (remote service
/// or fallback), a screening code is generated, and the row is inserted.
pub async fn submit_screening<S: ScreeningStore>(
    store: &S,
    resolver: &PredictionService,
    user_id: Uuid,
    population: Population,
    submission: &ScreeningSubmission,
) -> Result<SubmissionReceipt, FlowError> {
    let questionnaire = questionnaire_for(population);
    let completed =
        validate_screening(questionnaire.as_ref(), submission).map_err(FlowError::Validation)?;

    let outcome = resolver.resolve(population, &completed.responses).await;
    let screening_code = code::generate();

    let new = NewScreening {
        user_id,
        screening_code: screening_code.clone(),
        population,
        name: completed.name,
        age: completed.age,
        responses: completed.responses,
        prediction: outcome.value,
    };

    let record = match store.insert(new).await {
        Ok(record) => {
            info!(
                population = %population,
                screening_code = %record.screening_code,
                prediction = %record.prediction,
                source = ?outcome.source,
                "screening saved"
            );
            Some(record)
        }
        Err(error) => {
            warn!(
                population = %population,
                %error,
                "saving screening failed, continuing with in-memory result"
            );
            None
        }
    };

    Ok(SubmissionReceipt {
        outcome,
        screening_code,
        record,
    })
}

/// What the submitter sees after the classification pass.
#[derive(Debug, Clone)]
pub struct ClassificationReceipt {
    pub result: ClassificationResult,
    /// The updated row; absent when persistence failed.
    pub record: Option<ScreeningRecord>,
}

/// Validate and score the classification answers for an existing record,
/// then attach them to its row.
///
/// Requires the record's prediction to be positive; a negative screening
/// is rejected before scoring.
pub async fn complete_classification<S: ScreeningStore>(
    store: &S,
    record: &ScreeningRecord,
    answers: &BTreeMap<String, Answer>,
) -> Result<ClassificationReceipt, FlowError> {
    let questionnaire = questionnaire_for(record.population);
    let responses = validate_classification(answers).map_err(FlowError::Validation)?;
    let result = classify(record.prediction, questionnaire.as_ref(), &responses)?;

    let update = ClassificationUpdate {
        responses,
        result: result.level,
        chart: result.profile.clone(),
    };

    let stored = match store
        .attach_classification(record.population, record.id, update)
        .await
    {
        Ok(row) => {
            info!(
                screening_code = %row.screening_code,
                level = %result.level,
                "classification saved"
            );
            Some(row)
        }
        Err(error) => {
            warn!(
                screening_code = %record.screening_code,
                %error,
                "saving classification failed, continuing with in-memory result"
            );
            None
        }
    };

    Ok(ClassificationReceipt {
        result,
        record: stored,
    })
}
