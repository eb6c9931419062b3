use crate::aggregator::Aggregator;
use crate::error::Result;
use crate::model::AggregatedEnergyRecord;
use crate::reconciler::{reconcile, ReconcileOutcome};
use crate::store::EnergyStore;
use chrono::NaiveDate;

/// Runs one fetch, aggregate, reconcile cycle for a calendar day.
///
/// Any fetch or store error propagates unmodified and nothing is persisted
/// for that date. Returns the freshly computed record regardless of whether
/// it was inserted, left unchanged, or used to overwrite the stored one.
pub async fn run_aggregation(
    aggregator: &Aggregator,
    store: &dyn EnergyStore,
    date: NaiveDate,
) -> Result<AggregatedEnergyRecord> {
    let record = aggregator.aggregate(date).await?;
    tracing::debug!("Aggregated record: {:?}", record);

    let outcome = reconcile(store, &record).await?;
    match outcome {
        ReconcileOutcome::Inserted => tracing::info!("{}: inserted new record", record.date),
        ReconcileOutcome::Unchanged => tracing::info!("{}: stored record unchanged", record.date),
        ReconcileOutcome::Updated => tracing::info!("{}: stored record updated", record.date),
    }

    Ok(record)
}
