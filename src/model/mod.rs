//! Model definitions for monitoring API readings and the persisted
//! aggregate record.

pub mod records;
pub mod types;

// Re-export commonly used items at the module level
pub use records::{AggregatedEnergyRecord, EnergyBreakdown};
pub use types::{EnergyUnit, MeterKind, SiteId};
