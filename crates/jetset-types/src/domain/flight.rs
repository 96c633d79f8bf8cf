use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp::Timestamp;

/// Flight identifier as sent by the feed (integer or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightId::Number(n) => write!(f, "{}", n),
            FlightId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for FlightId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FlightId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FlightId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A single flight record from the feed.
///
/// Records are never mutated after decoding; every view over the catalog
/// is a new sequence of (shared) flights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: FlightId,
    pub airline: String,
    pub aircraft: String,
    pub flight_number: String,
    /// Sort key for price ordering
    pub price: f64,
    pub origin: String,
    pub destination: String,
    pub arrival_time: Timestamp,
    pub departure_time: Timestamp,
    /// Display only, never parsed
    pub duration: String,
    pub gate: String,
    pub seats_available: u32,
}

impl AsRef<Flight> for Flight {
    fn as_ref(&self) -> &Flight {
        self
    }
}
