use crate::error::PersistenceError;
use crate::model::AggregatedEnergyRecord;
use crate::store::EnergyStore;
use mongodb::bson::{to_document, Document};

/// What `reconcile` did with the freshly computed record.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReconcileOutcome {
    /// No document existed for the date; the record was inserted.
    Inserted,
    /// The stored document already matches; nothing was written.
    Unchanged,
    /// The stored document differed and was overwritten in place.
    Updated,
}

/// Compares a freshly computed record against the stored document for the
/// same date and inserts, leaves alone, or overwrites it.
///
/// Upstream can return revised figures for a previously fetched day (late
/// meter corrections), so a value mismatch is ordinary data and triggers a
/// silent in-place overwrite; re-runs with unchanged data perform no write.
pub async fn reconcile(
    store: &dyn EnergyStore,
    record: &AggregatedEnergyRecord,
) -> Result<ReconcileOutcome, PersistenceError> {
    let Some(existing) = store.find_by_date(&record.date).await? else {
        store.insert(record).await?;
        tracing::info!("No stored record for {}, inserted", record.date);
        return Ok(ReconcileOutcome::Inserted);
    };

    let fresh = to_document(record)?;
    if matches_stored(&existing, &fresh) {
        tracing::info!("Stored record for {} is already up to date", record.date);
        return Ok(ReconcileOutcome::Unchanged);
    }

    let id = existing
        .get("_id")
        .ok_or_else(|| PersistenceError::missing_id(record.date.as_str()))?;
    store.update(id, record).await?;
    tracing::info!(
        "Stored record for {} differed, overwrote with new values",
        record.date
    );
    Ok(ReconcileOutcome::Updated)
}

/// Subset comparison: every key the two documents share must hold equal
/// values. Keys present on only one side, such as the stored `_id`, are
/// ignored.
fn matches_stored(stored: &Document, fresh: &Document) -> bool {
    fresh.iter().all(|(key, value)| match stored.get(key) {
        Some(stored_value) => stored_value == value,
        None => true,
    })
}
