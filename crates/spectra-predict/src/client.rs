//! HTTP client for the remote inference service.
//!
//! The service exposes `POST /predict/{population}` over the ten screening
//! answers and `GET /health` reporting whether its models are loaded. The
//! health probe only drives the trust indicator; resolution always
//! attempts the real call regardless of the last probe result.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use spectra_core::models::outcome::{Prediction, PredictionOutcome, PredictionSource};
use spectra_core::models::population::Population;
use spectra_core::models::responses::ScreeningResponses;

use crate::error::PredictError;
use crate::heuristic::fallback_prediction;

/// Base URL used when [`PredictionService::from_env`] finds no override.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable naming the inference service base URL.
pub const BASE_URL_ENV: &str = "SPECTRA_PREDICT_URL";

/// Per-request timeout. A hang is treated like any other remote failure:
/// it triggers the fallback heuristic. No retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PredictRequest<'a> {
    responses: &'a ScreeningResponses,
}

/// A well-formed prediction response from the inference service.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePrediction {
    pub prediction: Prediction,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub features_used: Vec<u8>,
}

#[derive(Deserialize)]
struct HealthResponse {
    #[serde(default)]
    models_loaded: bool,
}

// ── Service ──────────────────────────────────────────────────────────────────

/// Client for the remote inference service.
#[derive(Debug, Clone)]
pub struct PredictionService {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, PredictError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a service from `SPECTRA_PREDICT_URL`, defaulting to the local
    /// development address.
    pub fn from_env() -> Result<Self, PredictError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Resolve a prediction for a complete set of screening answers.
    ///
    /// Never fails: any remote error (connect failure, timeout, non-2xx
    /// status, malformed body) is logged and answered by the deterministic
    /// fallback heuristic instead. The outcome's `source` records which
    /// path produced it.
    pub async fn resolve(
        &self,
        population: Population,
        responses: &ScreeningResponses,
    ) -> PredictionOutcome {
        match self.predict(population, responses).await {
            Ok(remote) => {
                info!(
                    population = %population,
                    prediction = %remote.prediction,
                    confidence = remote.confidence,
                    "remote prediction resolved"
                );
                PredictionOutcome {
                    value: remote.prediction,
                    confidence: remote.confidence,
                    source: PredictionSource::Remote,
                }
            }
            Err(error) => {
                warn!(
                    population = %population,
                    %error,
                    "remote prediction failed, using fallback heuristic"
                );
                fallback_prediction(population, responses)
            }
        }
    }

    /// One attempt against the remote service. Success requires a 2xx
    /// status and a body that parses to [`RemotePrediction`].
    pub async fn predict(
        &self,
        population: Population,
        responses: &ScreeningResponses,
    ) -> Result<RemotePrediction, PredictError> {
        let url = format!("{}/predict/{}", self.base_url, population);

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { responses })
            .send()
            .await
            .map_err(|e| PredictError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        response
            .json::<RemotePrediction>()
            .await
            .map_err(|e| PredictError::ResponseParse(e.to_string()))
    }

    /// Availability probe for the trust indicator: true iff `GET /health`
    /// answers 2xx with `models_loaded: true`. False on any failure; the
    /// result never blocks or alters [`PredictionService::resolve`].
    pub async fn is_service_healthy(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "health probe failed");
                return false;
            }
        };

        if !response.status().is_success() {
            return false;
        }

        response
            .json::<HealthResponse>()
            .await
            .map(|health| health.models_loaded)
            .unwrap_or(false)
    }
}
