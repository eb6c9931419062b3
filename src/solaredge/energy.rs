use super::client::Client;
use crate::error::UpstreamError;
use crate::model::{EnergyBreakdown, EnergyUnit, MeterKind, SiteId};
use chrono::{NaiveDate, NaiveTime};
use serde_derive::Deserialize;

#[derive(Deserialize, Debug)]
struct EnergyDetailsResponse {
    #[serde(rename = "energyDetails")]
    energy_details: MeterTimeSeries,
}

#[derive(Deserialize, Debug)]
struct MeterEnergyDetailsResponse {
    #[serde(rename = "meterEnergyDetails")]
    meter_energy_details: MeterTimeSeries,
}

/// The common payload shape shared by the daily and lifetime endpoints.
#[derive(Deserialize, Debug)]
struct MeterTimeSeries {
    unit: EnergyUnit,
    meters: Vec<Meter>,
}

#[derive(Deserialize, Debug)]
struct Meter {
    // The daily endpoint names this field `type`, the lifetime endpoint
    // `meterType`; both map onto the same kind enumeration.
    #[serde(rename = "type", alias = "meterType")]
    kind: MeterKind,
    #[serde(default)]
    values: Vec<MeterValue>,
}

#[derive(Deserialize, Debug)]
struct MeterValue {
    #[serde(default)]
    value: Option<f64>,
}

impl MeterTimeSeries {
    /// Extracts the five tracked quantities from the meter list.
    ///
    /// Day-granularity queries return a single bucket, so only the first
    /// value of each meter is consulted. A kind that is absent, has an
    /// empty value list, or reports no value contributes 0, keeping every
    /// field summable.
    fn into_breakdown(self) -> EnergyBreakdown {
        let mut breakdown = EnergyBreakdown::default();
        for meter in &self.meters {
            if let Some(value) = meter.values.first().and_then(|v| v.value) {
                breakdown.set(meter.kind, value);
            }
        }
        breakdown.normalize(self.unit)
    }
}

/// Formats a calendar day as the `YYYY-MM-DD HH:mm:ss` timestamp the
/// monitoring API expects for both ends of a single-day query.
fn day_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::default())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

impl Client {
    /// Fetches one site's energy flows for exactly one calendar day, in
    /// kilowatt-hours.
    pub async fn daily_energy(
        &self,
        site: SiteId,
        date: NaiveDate,
    ) -> Result<EnergyBreakdown, UpstreamError> {
        let timestamp = day_timestamp(date);
        let response: EnergyDetailsResponse = self
            .get_json(
                &format!("/site/{}/energyDetails", site),
                &[
                    ("timeUnit", "DAY"),
                    ("startTime", timestamp.as_str()),
                    ("endTime", timestamp.as_str()),
                ],
            )
            .await?;

        Ok(response.energy_details.into_breakdown())
    }

    /// Fetches one site's cumulative energy flows up to the given day, in
    /// kilowatt-hours.
    pub async fn lifetime_energy(
        &self,
        site: SiteId,
        date: NaiveDate,
    ) -> Result<EnergyBreakdown, UpstreamError> {
        let timestamp = day_timestamp(date);
        let response: MeterEnergyDetailsResponse = self
            .get_json(
                &format!("/site/{}/meters", site),
                &[
                    ("timeUnit", "DAY"),
                    ("startTime", timestamp.as_str()),
                    ("endTime", timestamp.as_str()),
                ],
            )
            .await?;

        Ok(response.meter_energy_details.into_breakdown())
    }
}
