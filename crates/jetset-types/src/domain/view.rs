use serde::{Deserialize, Serialize};
use std::fmt;

/// Price ordering applied to the displayed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Feed order
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Orders a user can pick; there is no "clear sort" choice
    pub const CHOICES: [SortOrder; 2] = [SortOrder::PriceAscending, SortOrder::PriceDescending];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "Feed order",
            SortOrder::PriceAscending => "Price (Ascending)",
            SortOrder::PriceDescending => "Price (Descending)",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Airline restriction on the displayed catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirlineFilter {
    /// No filter
    #[default]
    All,
    /// Exact, case-sensitive airline name
    Airline(String),
}

impl AirlineFilter {
    pub fn airline(name: impl Into<String>) -> Self {
        Self::Airline(name.into())
    }

    pub fn matches(&self, airline: &str) -> bool {
        match self {
            AirlineFilter::All => true,
            AirlineFilter::Airline(name) => name == airline,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AirlineFilter::All => None,
            AirlineFilter::Airline(name) => Some(name),
        }
    }
}

impl From<Option<String>> for AirlineFilter {
    fn from(name: Option<String>) -> Self {
        name.map(AirlineFilter::Airline).unwrap_or_default()
    }
}

impl fmt::Display for AirlineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirlineFilter::All => write!(f, "All airlines"),
            AirlineFilter::Airline(name) => write!(f, "{}", name),
        }
    }
}
