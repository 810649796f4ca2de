//! Submission validation.
//!
//! A form arrives as a draft: free-text name, optional age, and whatever
//! answers the user ticked. Validation either produces the fully-typed
//! response sets or a list of human-readable messages, in form order.
//! Nothing is persisted while validation fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use spectra_core::models::answer::Answer;
use spectra_core::models::population::{Population, SubjectAge};
use spectra_core::models::responses::{ClassificationResponses, ScreeningResponses};

use crate::Questionnaire;

/// A screening form as submitted, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningSubmission {
    pub name: String,
    pub age: Option<u32>,
    pub answers: BTreeMap<String, Answer>,
}

/// A validated, complete screening submission.
#[derive(Debug, Clone)]
pub struct CompletedScreening {
    pub name: String,
    pub age: SubjectAge,
    pub responses: ScreeningResponses,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a screening submission against its questionnaire.
///
/// Errors accumulate: a submission missing the name and three answers
/// reports all four problems at once.
pub fn validate_screening(
    questionnaire: &dyn Questionnaire,
    submission: &ScreeningSubmission,
) -> Result<CompletedScreening, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = submission.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    if submission.age.is_none() {
        let message = match questionnaire.population() {
            Population::Adult => "Age is required",
            Population::Toddler => "Age in months is required",
        };
        errors.push(ValidationError::new("age", message));
    }

    let responses = match ScreeningResponses::from_map(&submission.answers) {
        Ok(responses) => Some(responses),
        Err(missing) => {
            errors.extend(
                missing
                    .into_iter()
                    .map(|key| ValidationError::new(key, format!("Question {key} is required"))),
            );
            None
        }
    };

    match (submission.age, responses) {
        (Some(age), Some(responses)) if errors.is_empty() => Ok(CompletedScreening {
            name: name.to_string(),
            age: SubjectAge::for_population(questionnaire.population(), age),
            responses,
        }),
        _ => Err(errors),
    }
}

/// Validate the five classification answers.
pub fn validate_classification(
    answers: &BTreeMap<String, Answer>,
) -> Result<ClassificationResponses, Vec<ValidationError>> {
    ClassificationResponses::from_map(answers).map_err(|missing| {
        missing
            .into_iter()
            .map(|key| {
                ValidationError::new(key, format!("Classification question {key} is required"))
            })
            .collect()
    })
}
