use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

use super::types::{EnergyUnit, MeterKind};

/// The five energy flow quantities of one site for one date, in
/// kilowatt-hours.
///
/// One shared shape for both daily and lifetime (cumulative-to-date)
/// readings; the two only differ in which endpoint they came from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyBreakdown {
    pub purchased: f64,
    pub export: f64,
    pub consumption: f64,
    pub production: f64,
    pub self_consumption: f64,
}

impl EnergyBreakdown {
    /// Records one meter reading. Unrecognized kinds are dropped.
    pub fn set(&mut self, kind: MeterKind, value: f64) {
        match kind {
            MeterKind::Purchased => self.purchased = value,
            MeterKind::FeedIn => self.export = value,
            MeterKind::Production => self.production = value,
            MeterKind::Consumption => self.consumption = value,
            MeterKind::SelfConsumption => self.self_consumption = value,
            MeterKind::Unrecognized => {}
        }
    }

    /// Converts Wh readings to kWh. Any other declared unit passes through
    /// unchanged.
    pub fn normalize(self, unit: EnergyUnit) -> Self {
        match unit {
            EnergyUnit::WattHours => Self {
                purchased: self.purchased / 1000.0,
                export: self.export / 1000.0,
                consumption: self.consumption / 1000.0,
                production: self.production / 1000.0,
                self_consumption: self.self_consumption / 1000.0,
            },
            EnergyUnit::KilowattHours => self,
        }
    }
}

/// The one-document-per-day aggregate persisted to MongoDB.
///
/// Serialized field names follow the stored document schema
/// (`dailyPurchased`, `lifeTimePurchased`, ...). The `date` string is the
/// natural key of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedEnergyRecord {
    pub date: String,
    pub daily_purchased: f64,
    pub daily_export: f64,
    pub daily_consumption: f64,
    pub daily_production: f64,
    pub daily_self_consumption: f64,
    pub life_time_purchased: f64,
    pub life_time_export: f64,
    pub life_time_consumption: f64,
    pub life_time_production: f64,
    pub life_time_self_consumption: f64,
}

impl AggregatedEnergyRecord {
    /// An all-zero record for the given date. This is also the correct
    /// result for an account with no sites.
    pub fn zero(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            daily_purchased: 0.0,
            daily_export: 0.0,
            daily_consumption: 0.0,
            daily_production: 0.0,
            daily_self_consumption: 0.0,
            life_time_purchased: 0.0,
            life_time_export: 0.0,
            life_time_consumption: 0.0,
            life_time_production: 0.0,
            life_time_self_consumption: 0.0,
        }
    }

    /// Adds one site's daily and lifetime contributions into the totals.
    pub fn add_site(&mut self, daily: &EnergyBreakdown, lifetime: &EnergyBreakdown) {
        self.daily_purchased += daily.purchased;
        self.daily_export += daily.export;
        self.daily_consumption += daily.consumption;
        self.daily_production += daily.production;
        self.daily_self_consumption += daily.self_consumption;

        self.life_time_purchased += lifetime.purchased;
        self.life_time_export += lifetime.export;
        self.life_time_consumption += lifetime.consumption;
        self.life_time_production += lifetime.production;
        self.life_time_self_consumption += lifetime.self_consumption;
    }
}
