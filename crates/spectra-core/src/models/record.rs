use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::classification::{SupportLevel, TraitProfile};
use crate::models::outcome::Prediction;
use crate::models::population::{Population, SubjectAge};
use crate::models::responses::{ClassificationResponses, ScreeningResponses};

/// The canonical persisted unit: one row in a population's screening table.
///
/// Created at submission, possibly without classification fields; mutated
/// once when classification completes; never deleted by this core. One
/// logical session may surface as multiple rows sharing a screening code,
/// and reconciliation collapses them at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub screening_code: String,
    pub name: String,
    pub age: SubjectAge,
    pub population: Population,
    pub responses: ScreeningResponses,
    pub prediction: Prediction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classification_responses: Option<ClassificationResponses>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub classification_result: Option<SupportLevel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chart_data: Option<TraitProfile>,
    pub created_at: jiff::Timestamp,
}

impl ScreeningRecord {
    /// Whether this row carries the later classification pass.
    pub fn is_classified(&self) -> bool {
        self.classification_result.is_some()
    }
}
