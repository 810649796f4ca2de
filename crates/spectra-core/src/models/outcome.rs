use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Binary screening prediction. Uppercase wire form (`"YES"`/`"NO"`),
/// matching the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Prediction {
    Yes,
    No,
}

impl Prediction {
    pub fn is_positive(&self) -> bool {
        matches!(self, Prediction::Yes)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::Yes => f.write_str("YES"),
            Prediction::No => f.write_str("NO"),
        }
    }
}

/// Where a prediction came from. Drives the trust indicator in the UI and
/// is carried on every outcome, never silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PredictionSource {
    /// The remote inference service answered.
    Remote,
    /// The deterministic local heuristic answered.
    Fallback,
}

/// A resolved screening prediction.
///
/// `confidence` is only present on remote outcomes, and is not persisted:
/// records keep the bare [`Prediction`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionOutcome {
    pub value: Prediction,
    pub confidence: Option<f64>,
    pub source: PredictionSource,
}
