use serde_derive::Deserialize;
use std::fmt;

/// Identifier of one monitored installation, as returned by the site list
/// endpoint. Only lives for the duration of one aggregation run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categories of energy flow reported by the monitoring API.
///
/// The daily endpoint names this field `type` and the lifetime endpoint
/// names it `meterType`; both deserialize into this one enumeration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub enum MeterKind {
    /// Energy bought from the grid
    Purchased,
    /// Energy exported to the grid
    FeedIn,
    /// Energy produced by the installation
    Production,
    /// Energy consumed on site
    Consumption,
    /// Produced energy consumed directly on site
    SelfConsumption,
    /// Any kind this pipeline does not track; its readings are ignored
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for MeterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeterKind::Purchased => write!(f, "Purchased"),
            MeterKind::FeedIn => write!(f, "FeedIn"),
            MeterKind::Production => write!(f, "Production"),
            MeterKind::Consumption => write!(f, "Consumption"),
            MeterKind::SelfConsumption => write!(f, "SelfConsumption"),
            MeterKind::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

/// Unit declared for all meters within one monitoring API response.
///
/// Determines whether raw values need dividing by 1000 before use. Anything
/// other than `Wh` is treated as already being in kilowatt-hours.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "Wh")]
    WattHours,
    #[serde(other)]
    KilowattHours,
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EnergyUnit::WattHours => write!(f, "Wh"),
            EnergyUnit::KilowattHours => write!(f, "kWh"),
        }
    }
}
