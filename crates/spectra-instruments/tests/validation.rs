use std::collections::BTreeMap;

use spectra_core::models::answer::Answer;
use spectra_core::models::population::{Population, SubjectAge};
use spectra_instruments::questionnaire_for;
use spectra_instruments::submission::{validate_classification, validate_screening, ScreeningSubmission};

fn full_answers(answer: Answer) -> BTreeMap<String, Answer> {
    (1..=10).map(|i| (format!("A{i}"), answer)).collect()
}

#[test]
fn complete_adult_submission_validates() {
    let questionnaire = questionnaire_for(Population::Adult);
    let submission = ScreeningSubmission {
        name: "  Alex Doe ".to_string(),
        age: Some(29),
        answers: full_answers(Answer::No),
    };

    let completed = validate_screening(questionnaire.as_ref(), &submission).unwrap();
    assert_eq!(completed.name, "Alex Doe");
    assert_eq!(completed.age, SubjectAge::Years(29));
    assert_eq!(completed.responses.yes_count(), 0);
}

#[test]
fn toddler_age_is_recorded_in_months() {
    let questionnaire = questionnaire_for(Population::Toddler);
    let submission = ScreeningSubmission {
        name: "Sam".to_string(),
        age: Some(30),
        answers: full_answers(Answer::Yes),
    };

    let completed = validate_screening(questionnaire.as_ref(), &submission).unwrap();
    assert_eq!(completed.age, SubjectAge::Months(30));
}

#[test]
fn empty_submission_reports_every_problem_at_once() {
    let questionnaire = questionnaire_for(Population::Adult);
    let submission = ScreeningSubmission::default();

    let errors = validate_screening(questionnaire.as_ref(), &submission).unwrap_err();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();

    assert_eq!(messages[0], "Name is required");
    assert_eq!(messages[1], "Age is required");
    assert_eq!(messages[2], "Question A1 is required");
    assert_eq!(messages.len(), 12);
}

#[test]
fn toddler_age_message_names_the_unit() {
    let questionnaire = questionnaire_for(Population::Toddler);
    let submission = ScreeningSubmission {
        name: "Sam".to_string(),
        age: None,
        answers: full_answers(Answer::No),
    };

    let errors = validate_screening(questionnaire.as_ref(), &submission).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Age in months is required");
}

#[test]
fn one_missing_answer_is_reported_by_key() {
    let questionnaire = questionnaire_for(Population::Adult);
    let mut answers = full_answers(Answer::Yes);
    answers.remove("A7");
    let submission = ScreeningSubmission {
        name: "Alex".to_string(),
        age: Some(40),
        answers,
    };

    let errors = validate_screening(questionnaire.as_ref(), &submission).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "A7");
    assert_eq!(errors[0].message, "Question A7 is required");
}

#[test]
fn classification_validation_rejects_missing_answers() {
    let mut answers: BTreeMap<String, Answer> =
        (1..=5).map(|i| (format!("Q{i}"), Answer::Yes)).collect();
    answers.remove("Q3");

    let errors = validate_classification(&answers).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Classification question Q3 is required");
}

#[test]
fn classification_validation_accepts_a_full_set() {
    let answers: BTreeMap<String, Answer> =
        (1..=5).map(|i| (format!("Q{i}"), Answer::No)).collect();

    let responses = validate_classification(&answers).unwrap();
    assert_eq!(responses.yes_count(), 0);
}
