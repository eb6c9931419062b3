//! JSON response builders for the monitoring API endpoints.

use serde_json::{json, Value};

/// Builds a `/sites/list` response body for the given site ids.
pub fn site_list_body(ids: &[u64]) -> String {
    let sites: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id, "name": format!("Site {}", id), "status": "Active" }))
        .collect();
    json!({ "sites": { "count": sites.len(), "site": sites } }).to_string()
}

/// Builds a `/site/<id>/energyDetails` response body.
///
/// Each meter is a (kind, first value) pair; `None` produces an empty value
/// list. The kind field is named `type`, as the daily endpoint does.
pub fn energy_details_body(unit: &str, meters: &[(&str, Option<f64>)]) -> String {
    json!({
        "energyDetails": {
            "timeUnit": "DAY",
            "unit": unit,
            "meters": meter_entries("type", meters),
        }
    })
    .to_string()
}

/// Builds a `/site/<id>/meters` response body.
///
/// Same shape as [`energy_details_body`] except the kind field is named
/// `meterType`, as the lifetime endpoint does.
pub fn meter_energy_details_body(unit: &str, meters: &[(&str, Option<f64>)]) -> String {
    json!({
        "meterEnergyDetails": {
            "timeUnit": "DAY",
            "unit": unit,
            "meters": meter_entries("meterType", meters),
        }
    })
    .to_string()
}

fn meter_entries(kind_field: &str, meters: &[(&str, Option<f64>)]) -> Vec<Value> {
    meters
        .iter()
        .map(|(kind, value)| {
            let values: Vec<Value> = match value {
                Some(v) => vec![json!({ "date": "2024-06-27 00:00:00", "value": v })],
                None => vec![],
            };
            let mut entry = serde_json::Map::new();
            entry.insert(kind_field.to_string(), json!(kind));
            entry.insert("values".to_string(), json!(values));
            Value::Object(entry)
        })
        .collect()
}
