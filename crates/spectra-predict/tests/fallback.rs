use std::collections::BTreeMap;

use spectra_core::models::answer::Answer;
use spectra_core::models::outcome::{Prediction, PredictionSource};
use spectra_core::models::population::Population;
use spectra_core::models::responses::ScreeningResponses;
use spectra_predict::{fallback_prediction, PredictionService};

fn responses_with_yes_count(count: usize) -> ScreeningResponses {
    let map: BTreeMap<String, Answer> = ScreeningResponses::KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let answer = if i < count { Answer::Yes } else { Answer::No };
            (key.to_string(), answer)
        })
        .collect();
    ScreeningResponses::from_map(&map).unwrap()
}

/// A service whose endpoint cannot be reached: every remote call fails
/// fast with a connect error, exercising the fallback path.
fn unreachable_service() -> PredictionService {
    PredictionService::new("http://127.0.0.1:9").unwrap()
}

#[test]
fn adult_threshold_is_six_of_ten() {
    for yes_count in 0..=10 {
        let outcome = fallback_prediction(Population::Adult, &responses_with_yes_count(yes_count));
        let expected = if yes_count >= 6 {
            Prediction::Yes
        } else {
            Prediction::No
        };
        assert_eq!(outcome.value, expected, "adult with {yes_count} yes");
        assert_eq!(outcome.source, PredictionSource::Fallback);
        assert_eq!(outcome.confidence, None);
    }
}

#[test]
fn toddler_threshold_is_three_of_ten() {
    for yes_count in 0..=10 {
        let outcome =
            fallback_prediction(Population::Toddler, &responses_with_yes_count(yes_count));
        let expected = if yes_count >= 3 {
            Prediction::Yes
        } else {
            Prediction::No
        };
        assert_eq!(outcome.value, expected, "toddler with {yes_count} yes");
    }
}

#[tokio::test]
async fn unreachable_service_falls_back_for_adults() {
    // Scenario: 7 yes / 3 no with the inference backend down.
    let outcome = unreachable_service()
        .resolve(Population::Adult, &responses_with_yes_count(7))
        .await;

    assert_eq!(outcome.value, Prediction::Yes);
    assert_eq!(outcome.confidence, None);
    assert_eq!(outcome.source, PredictionSource::Fallback);
}

#[tokio::test]
async fn unreachable_service_falls_back_for_toddlers() {
    let service = unreachable_service();

    let positive = service
        .resolve(Population::Toddler, &responses_with_yes_count(3))
        .await;
    assert_eq!(positive.value, Prediction::Yes);
    assert_eq!(positive.source, PredictionSource::Fallback);

    let negative = service
        .resolve(Population::Toddler, &responses_with_yes_count(2))
        .await;
    assert_eq!(negative.value, Prediction::No);
    assert_eq!(negative.source, PredictionSource::Fallback);
}

#[tokio::test]
async fn health_probe_is_false_when_unreachable() {
    assert!(!unreachable_service().is_service_healthy().await);
}

#[tokio::test]
async fn direct_predict_surfaces_the_remote_error() {
    let err = unreachable_service()
        .predict(Population::Adult, &responses_with_yes_count(5))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("prediction request failed"));
}
