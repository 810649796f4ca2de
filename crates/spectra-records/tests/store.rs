mod common;

use uuid::Uuid;

use spectra_core::models::classification::SupportLevel;
use spectra_core::models::outcome::Prediction;
use spectra_core::models::population::{Population, SubjectAge};
use spectra_records::error::StoreError;
use spectra_records::store::{ClassificationUpdate, MemoryStore, NewScreening, ScreeningStore};

use common::{classification_responses, screening_responses};

fn new_screening(user_id: Uuid, code: &str) -> NewScreening {
    NewScreening {
        user_id,
        screening_code: code.to_string(),
        population: Population::Adult,
        name: "Alex Doe".to_string(),
        age: SubjectAge::Years(29),
        responses: screening_responses(7),
        prediction: Prediction::Yes,
    }
}

fn update() -> ClassificationUpdate {
    ClassificationUpdate {
        responses: classification_responses(3),
        result: SupportLevel::Level2,
        chart: spectra_core::models::classification::TraitProfile {
            labels: vec!["Social Communication".to_string()],
            values: vec![4],
        },
    }
}

#[tokio::test]
async fn insert_returns_the_stored_row() {
    let user = Uuid::new_v4();
    let store = MemoryStore::new();

    let row = store.insert(new_screening(user, "AB12CD")).await.unwrap();
    assert_eq!(row.screening_code, "AB12CD");
    assert_eq!(row.user_id, user);
    assert_eq!(row.prediction, Prediction::Yes);
    assert!(!row.is_classified());

    let listed = store.list_by_owner(Population::Adult, user).await.unwrap();
    assert_eq!(listed, vec![row]);
}

#[tokio::test]
async fn attach_classification_mutates_the_row_once() {
    let user = Uuid::new_v4();
    let store = MemoryStore::new();
    let row = store.insert(new_screening(user, "AB12CD")).await.unwrap();

    let updated = store
        .attach_classification(Population::Adult, row.id, update())
        .await
        .unwrap();
    assert_eq!(updated.id, row.id);
    assert_eq!(updated.classification_result, Some(SupportLevel::Level2));
    assert!(updated.classification_responses.is_some());
    assert!(updated.chart_data.is_some());

    // The table now holds the mutated row, still as a single entry.
    let listed = store.list_by_owner(Population::Adult, user).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_classified());
}

#[tokio::test]
async fn attach_classification_to_unknown_row_fails() {
    let store = MemoryStore::new();
    let missing = Uuid::new_v4();

    let err = store
        .attach_classification(Population::Adult, missing, update())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id } if id == missing));
}

#[tokio::test]
async fn selects_are_equality_filtered_by_owner_and_code() {
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();
    let store = MemoryStore::new();
    store.insert(new_screening(user, "AB12CD")).await.unwrap();
    store.insert(new_screening(other, "AB12CD")).await.unwrap();

    let mine = store
        .find_by_code(Population::Adult, user, "AB12CD")
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, user);

    let wrong_table = store
        .find_by_code(Population::Toddler, user, "AB12CD")
        .await
        .unwrap();
    assert!(wrong_table.is_empty());
}
