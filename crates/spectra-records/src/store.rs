//! The persistence seam: two logical tables, one per population, reached
//! through equality filters only. Insert returns the stored row; a row is
//! mutated at most once, when classification completes.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use spectra_core::models::classification::{SupportLevel, TraitProfile};
use spectra_core::models::outcome::Prediction;
use spectra_core::models::population::{Population, SubjectAge};
use spectra_core::models::record::ScreeningRecord;
use spectra_core::models::responses::{ClassificationResponses, ScreeningResponses};

use crate::error::StoreError;

/// Fields of a screening row at initial submission. The store assigns the
/// row identity and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewScreening {
    pub user_id: Uuid,
    pub screening_code: String,
    pub population: Population,
    pub name: String,
    pub age: SubjectAge,
    pub responses: ScreeningResponses,
    pub prediction: Prediction,
}

/// The one mutation a row sees: the later classification pass.
#[derive(Debug, Clone)]
pub struct ClassificationUpdate {
    pub responses: ClassificationResponses,
    pub result: SupportLevel,
    pub chart: TraitProfile,
}

/// Capability interface over the screening tables.
///
/// Implementations provide insert-returning-row, update-by-identity, and
/// equality-filtered selects, nothing else. Reconciliation happens on the
/// caller's side.
#[allow(async_fn_in_trait)]
pub trait ScreeningStore {
    async fn insert(&self, new: NewScreening) -> Result<ScreeningRecord, StoreError>;

    async fn attach_classification(
        &self,
        population: Population,
        id: Uuid,
        update: ClassificationUpdate,
    ) -> Result<ScreeningRecord, StoreError>;

    async fn list_by_owner(
        &self,
        population: Population,
        user_id: Uuid,
    ) -> Result<Vec<ScreeningRecord>, StoreError>;

    async fn find_by_code(
        &self,
        population: Population,
        user_id: Uuid,
        code: &str,
    ) -> Result<Vec<ScreeningRecord>, StoreError>;
}

/// In-memory implementation: one vector per population table.
///
/// Codes are not deduplicated on insert: like the real storage layer, one
/// logical session may accumulate multiple rows, and readers reconcile.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Population, Vec<ScreeningRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed row as-is, keeping its identity and timestamp.
    pub fn seed(&self, record: ScreeningRecord) {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.entry(record.population).or_default().push(record);
    }
}

impl ScreeningStore for MemoryStore {
    async fn insert(&self, new: NewScreening) -> Result<ScreeningRecord, StoreError> {
        let record = ScreeningRecord {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            screening_code: new.screening_code,
            name: new.name,
            age: new.age,
            population: new.population,
            responses: new.responses,
            prediction: new.prediction,
            classification_responses: None,
            classification_result: None,
            chart_data: None,
            created_at: jiff::Timestamp::now(),
        };

        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables
            .entry(record.population)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn attach_classification(
        &self,
        population: Population,
        id: Uuid,
        update: ClassificationUpdate,
    ) -> Result<ScreeningRecord, StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        let table = tables.entry(population).or_default();

        let record = table
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound { id })?;

        record.classification_responses = Some(update.responses);
        record.classification_result = Some(update.result);
        record.chart_data = Some(update.chart);
        Ok(record.clone())
    }

    async fn list_by_owner(
        &self,
        population: Population,
        user_id: Uuid,
    ) -> Result<Vec<ScreeningRecord>, StoreError> {
        let tables = self.tables.lock().expect("store mutex poisoned");
        Ok(tables
            .get(&population)
            .map(|table| {
                table
                    .iter()
                    .filter(|r| r.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_code(
        &self,
        population: Population,
        user_id: Uuid,
        code: &str,
    ) -> Result<Vec<ScreeningRecord>, StoreError> {
        let tables = self.tables.lock().expect("store mutex poisoned");
        Ok(tables
            .get(&population)
            .map(|table| {
                table
                    .iter()
                    .filter(|r| r.user_id == user_id && r.screening_code == code)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
