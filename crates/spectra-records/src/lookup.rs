//! Cross-session lookup by screening code, scoped to the owning user.

use uuid::Uuid;

use spectra_core::code;
use spectra_core::models::population::Population;
use spectra_core::models::record::ScreeningRecord;

use crate::dashboard::collect_source;
use crate::error::LookupError;
use crate::reconcile::reconcile;
use crate::store::ScreeningStore;

/// Find the screening for a user-entered code.
///
/// The code is normalized (so lowercase input is accepted) and validated
/// before any query. Both population tables are searched concurrently with
/// an equality filter on code and owner; a code without matching ownership
/// returns [`LookupError::NotFound`], which does not reveal whether the
/// code exists at all. Fragmented rows reconcile to the most informative
/// one.
pub async fn find_screening<S: ScreeningStore>(
    store: &S,
    user_id: Uuid,
    raw_code: &str,
) -> Result<ScreeningRecord, LookupError> {
    let code = code::normalize(raw_code);
    if !code::is_valid(&code) {
        return Err(LookupError::InvalidCode);
    }

    let (adult, toddler) = tokio::join!(
        store.find_by_code(Population::Adult, user_id, &code),
        store.find_by_code(Population::Toddler, user_id, &code),
    );

    let mut rows = Vec::new();
    collect_source(&mut rows, Population::Adult, adult);
    collect_source(&mut rows, Population::Toddler, toddler);

    reconcile(rows).into_iter().next().ok_or(LookupError::NotFound)
}
