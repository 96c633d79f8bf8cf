use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Wire representation: ISO-8601 text or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

/// Feed timestamp.
///
/// Keeps the value exactly as received alongside the parsed instant.
/// Unparsable values are not a decoding error; they simply have no instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTimestamp", into = "RawTimestamp")]
pub struct Timestamp {
    raw: RawTimestamp,
    instant: Option<DateTime<FixedOffset>>,
}

impl Timestamp {
    /// Parse ISO-8601 text. Values without an offset are read as UTC.
    pub fn parse(text: &str) -> Self {
        Self {
            instant: parse_text(text),
            raw: RawTimestamp::Text(text.to_string()),
        }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self {
            instant: DateTime::from_timestamp_millis(millis).map(|dt| dt.fixed_offset()),
            raw: RawTimestamp::Millis(millis),
        }
    }

    /// Parsed instant, in the offset carried by the source value
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.instant
    }

    /// Original value as text
    pub fn raw(&self) -> String {
        match &self.raw {
            RawTimestamp::Millis(ms) => ms.to_string(),
            RawTimestamp::Text(s) => s.clone(),
        }
    }
}

impl From<RawTimestamp> for Timestamp {
    fn from(raw: RawTimestamp) -> Self {
        match raw {
            RawTimestamp::Millis(ms) => Self::from_millis(ms),
            RawTimestamp::Text(s) => Self::parse(&s),
        }
    }
}

impl From<Timestamp> for RawTimestamp {
    fn from(ts: Timestamp) -> Self {
        ts.raw
    }
}

fn parse_text(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
