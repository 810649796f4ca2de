//! Record reconciliation: collapse fragmented rows of one screening
//! session into the single most informative view.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use spectra_core::models::population::Population;
use spectra_core::models::record::ScreeningRecord;

/// Collapse rows to one logical entry per screening code.
///
/// Per code: a single row is kept as-is; a classified row beats an
/// unclassified one; between rows of equal completeness the later
/// `created_at` wins. No code present in the input is ever dropped.
///
/// Output is canonically ordered by code ascending, which makes the
/// function idempotent; callers re-sort with [`sort_records`].
pub fn reconcile(rows: Vec<ScreeningRecord>) -> Vec<ScreeningRecord> {
    let mut by_code: HashMap<String, ScreeningRecord> = HashMap::new();

    for row in rows {
        match by_code.entry(row.screening_code.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                if supersedes(&row, slot.get()) {
                    slot.insert(row);
                }
            }
        }
    }

    let mut merged: Vec<ScreeningRecord> = by_code.into_values().collect();
    merged.sort_by(|a, b| a.screening_code.cmp(&b.screening_code));
    merged
}

/// Whether `candidate` is a more informative row than `current` for the
/// same screening code.
fn supersedes(candidate: &ScreeningRecord, current: &ScreeningRecord) -> bool {
    match (candidate.is_classified(), current.is_classified()) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.created_at > current.created_at,
    }
}

/// Caller-selectable ordering for a reconciled result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest first.
    CreatedAtDesc,
    /// Lexicographic by screening code.
    CodeAsc,
}

pub fn sort_records(records: &mut [ScreeningRecord], key: SortKey) {
    match key {
        SortKey::CreatedAtDesc => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::CodeAsc => records.sort_by(|a, b| a.screening_code.cmp(&b.screening_code)),
    }
}

/// Dashboard filters, applied after reconciliation. `search` matches the
/// subject name or the screening code, case-insensitively; `population`
/// matches exactly. Both must hold.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub search: Option<String>,
    pub population: Option<Population>,
}

impl RecordFilter {
    pub fn matches(&self, record: &ScreeningRecord) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            record.name.to_lowercase().contains(&term)
                || record.screening_code.to_lowercase().contains(&term)
        });

        let population_ok = self
            .population
            .is_none_or(|population| record.population == population);

        search_ok && population_ok
    }

    pub fn apply(&self, records: Vec<ScreeningRecord>) -> Vec<ScreeningRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
