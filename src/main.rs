//! SolarEdge to MongoDB daily energy aggregator.
//!
//! This application fetches per-site energy metrics from the SolarEdge
//! monitoring API, sums daily and lifetime totals across every site of one
//! account, and persists one MongoDB document per calendar day.
//!
//! # Behavior
//!
//! Each invocation processes the last `AGGREGATOR_BACKFILL_DAYS` calendar
//! days (default: yesterday only). For each day the stored document is
//! reconciled against the freshly computed totals: inserted when absent,
//! left alone when identical, overwritten in place when upstream revised
//! its figures. A failed day aborts without writing anything for that day
//! and the process exits nonzero so an external scheduler can notice.

mod aggregator;
mod config;
mod error;
mod model;
mod pipeline;
mod reconciler;
mod solaredge;
mod store;

#[cfg(test)]
mod test_utils;

use crate::aggregator::Aggregator;
use crate::store::MongoStore;
use chrono::{Duration, Local};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let solaredge_config =
        config::load_solaredge_config().expect("Failed to load SolarEdgeConfig");
    let mongo_config = config::load_mongo_config().expect("Failed to load MongoConfig");
    let aggregator_config =
        config::load_aggregator_config().expect("Failed to load AggregatorConfig");

    let client = Arc::new(solaredge::Client::new(solaredge_config));
    let aggregator = Aggregator::new(client);
    let store = MongoStore::connect(mongo_config)
        .await
        .expect("Failed to connect to MongoDB");

    // Days are relative to the local clock; day 1 is yesterday.
    let today = Local::now().date_naive();
    let mut failed = false;
    for days_back in 1..=aggregator_config.backfill_days {
        let date = today - Duration::days(days_back as i64);
        match pipeline::run_aggregation(&aggregator, &store, date).await {
            Ok(record) => tracing::info!("Finished aggregation for {}", record.date),
            Err(e) => {
                tracing::error!("Aggregation for {} failed: {:?}", date, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
