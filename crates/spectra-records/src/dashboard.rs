//! Owner-scoped dashboard fetch across both population tables.

use tracing::warn;
use uuid::Uuid;

use spectra_core::models::population::Population;
use spectra_core::models::record::ScreeningRecord;

use crate::error::StoreError;
use crate::reconcile::{reconcile, sort_records, SortKey};
use crate::store::ScreeningStore;

/// Fetch every screening owned by `user_id`, reconciled and sorted.
///
/// The adult and toddler tables are queried concurrently and joined
/// without fail-fast: a failing table is logged and the other table's
/// rows are still returned. Nothing here retries.
pub async fn fetch_reconciled<S: ScreeningStore>(
    store: &S,
    user_id: Uuid,
    sort: SortKey,
) -> Vec<ScreeningRecord> {
    let (adult, toddler) = tokio::join!(
        store.list_by_owner(Population::Adult, user_id),
        store.list_by_owner(Population::Toddler, user_id),
    );

    let mut rows = Vec::new();
    collect_source(&mut rows, Population::Adult, adult);
    collect_source(&mut rows, Population::Toddler, toddler);

    let mut merged = reconcile(rows);
    sort_records(&mut merged, sort);
    merged
}

pub(crate) fn collect_source(
    rows: &mut Vec<ScreeningRecord>,
    population: Population,
    result: Result<Vec<ScreeningRecord>, StoreError>,
) {
    match result {
        Ok(mut found) => rows.append(&mut found),
        Err(error) => {
            warn!(
                population = %population,
                %error,
                "listing screenings failed, continuing without this table"
            );
        }
    }
}
