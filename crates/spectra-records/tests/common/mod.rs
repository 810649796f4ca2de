#![allow(dead_code)]

use std::collections::BTreeMap;

use uuid::Uuid;

use spectra_core::models::answer::Answer;
use spectra_core::models::classification::SupportLevel;
use spectra_core::models::outcome::Prediction;
use spectra_core::models::population::{Population, SubjectAge};
use spectra_core::models::record::ScreeningRecord;
use spectra_core::models::responses::{ClassificationResponses, ScreeningResponses};

pub fn screening_responses(yes_count: usize) -> ScreeningResponses {
    let map: BTreeMap<String, Answer> = ScreeningResponses::KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let answer = if i < yes_count { Answer::Yes } else { Answer::No };
            (key.to_string(), answer)
        })
        .collect();
    ScreeningResponses::from_map(&map).unwrap()
}

pub fn classification_responses(yes_count: usize) -> ClassificationResponses {
    let map: BTreeMap<String, Answer> = ClassificationResponses::KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let answer = if i < yes_count { Answer::Yes } else { Answer::No };
            (key.to_string(), answer)
        })
        .collect();
    ClassificationResponses::from_map(&map).unwrap()
}

pub fn record(
    user_id: Uuid,
    code: &str,
    population: Population,
    classified: bool,
    created_at: &str,
) -> ScreeningRecord {
    ScreeningRecord {
        id: Uuid::new_v4(),
        user_id,
        screening_code: code.to_string(),
        name: format!("Subject {code}"),
        age: SubjectAge::for_population(population, 30),
        population,
        responses: screening_responses(7),
        prediction: Prediction::Yes,
        classification_responses: classified.then(|| classification_responses(3)),
        classification_result: classified.then_some(SupportLevel::Level2),
        chart_data: None,
        created_at: created_at.parse().unwrap(),
    }
}
