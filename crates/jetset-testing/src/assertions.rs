//! Custom assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of the displayed flights, in displayed order.
pub fn flight_ids(json: &Value) -> Result<Vec<String>> {
    let flights = json["content"]["flights"]
        .as_array()
        .context("Expected 'content.flights' array in JSON")?;

    flights
        .iter()
        .enumerate()
        .map(|(i, flight)| {
            flight["id"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Flight {} missing id", i))
        })
        .collect()
}

/// Assert the displayed flights have exactly these ids, in this order.
pub fn assert_flight_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = flight_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected flights {:?}, got {:?}", expected, ids);
    }
    Ok(())
}
