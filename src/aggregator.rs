use crate::error::UpstreamError;
use crate::model::AggregatedEnergyRecord;
use crate::solaredge::Client;
use chrono::NaiveDate;
use std::sync::Arc;

/// Sums per-site daily and lifetime energy across all sites of one account
/// into a single record per calendar day.
pub struct Aggregator {
    client: Arc<Client>,
}

impl Aggregator {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Computes the aggregate record for `date`.
    ///
    /// Sites are fetched one at a time and folded into an explicit
    /// accumulator. A failed fetch for any site aborts the whole run, so a
    /// partial aggregate never escapes. An account with no sites yields an
    /// all-zero record.
    pub async fn aggregate(&self, date: NaiveDate) -> Result<AggregatedEnergyRecord, UpstreamError> {
        let site_ids = self.client.list_sites().await?;
        tracing::debug!("Aggregating {} site(s) for {}", site_ids.len(), date);

        let mut record = AggregatedEnergyRecord::zero(date);
        for site_id in site_ids {
            let daily = self.client.daily_energy(site_id, date).await?;
            let lifetime = self.client.lifetime_energy(site_id, date).await?;
            record.add_site(&daily, &lifetime);
        }
        Ok(record)
    }
}
