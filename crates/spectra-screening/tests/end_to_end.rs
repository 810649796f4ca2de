//! Full pipeline: submit with the inference backend down, classify,
//! reconcile at dashboard time, look up by code, render the report.

use std::collections::BTreeMap;

use uuid::Uuid;

use spectra_core::models::answer::Answer;
use spectra_core::models::classification::SupportLevel;
use spectra_core::models::outcome::{Prediction, PredictionSource};
use spectra_core::models::population::Population;
use spectra_instruments::submission::ScreeningSubmission;
use spectra_predict::PredictionService;
use spectra_records::dashboard::fetch_reconciled;
use spectra_records::lookup::find_screening;
use spectra_records::reconcile::SortKey;
use spectra_records::store::MemoryStore;
use spectra_report::render_report;
use spectra_screening::{complete_classification, submit_screening};

#[tokio::test]
async fn screening_pipeline_end_to_end() {
    let store = MemoryStore::new();
    let resolver = PredictionService::new("http://127.0.0.1:9").unwrap();
    let user = Uuid::new_v4();

    // Submit: 7 of 10 yes, remote service unreachable.
    let submission = ScreeningSubmission {
        name: "Alex Doe".to_string(),
        age: Some(29),
        answers: (1..=10)
            .map(|i| {
                let answer = if i <= 7 { Answer::Yes } else { Answer::No };
                (format!("A{i}"), answer)
            })
            .collect(),
    };
    let receipt = submit_screening(&store, &resolver, user, Population::Adult, &submission)
        .await
        .unwrap();
    assert_eq!(receipt.outcome.value, Prediction::Yes);
    assert_eq!(receipt.outcome.source, PredictionSource::Fallback);
    let record = receipt.record.unwrap();

    // Classify: all five support questions flagged.
    let answers: BTreeMap<String, Answer> =
        (1..=5).map(|i| (format!("Q{i}"), Answer::Yes)).collect();
    let classified = complete_classification(&store, &record, &answers)
        .await
        .unwrap();
    assert_eq!(classified.result.level, SupportLevel::Level3);

    // Dashboard: one logical entry, the classified view of the session.
    let entries = fetch_reconciled(&store, user, SortKey::CreatedAtDesc).await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_classified());

    // Lookup accepts the lowercase form of the code.
    let found = find_screening(&store, user, &receipt.screening_code.to_lowercase())
        .await
        .unwrap();
    assert_eq!(found.screening_code, receipt.screening_code);

    // Report embeds the identifying info, prediction, and tier.
    let html = render_report(&found).unwrap();
    assert!(html.contains(&receipt.screening_code));
    assert!(html.contains("Alex Doe"));
    assert!(html.contains("Autism Traits Detected"));
    assert!(html.contains("Level 3 (Requiring Very Substantial Support)"));
}
