use serde::Serialize;

use jetset_types::SortOrder;

/// One flight, already formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightCardViewModel {
    pub id: String,
    pub airline: String,
    pub aircraft: String,
    pub flight_number: String,
    pub price: f64,
    pub price_label: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub gate: String,
    pub seats_available: u32,
    #[serde(skip)]
    pub expanded: bool,
}

impl FlightCardViewModel {
    /// `Boeing 737 [JS123] - Rs2500`
    pub fn headline(&self) -> String {
        format!(
            "{} [{}] - {}",
            self.aircraft, self.flight_number, self.price_label
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightListViewModel {
    pub sort_order: SortOrder,
    pub sort_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_filter: Option<String>,
    /// Flights in the raw dataset, before filtering
    pub total: usize,
    pub flights: Vec<FlightCardViewModel>,
}

impl FlightListViewModel {
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AirlineListViewModel {
    pub airlines: Vec<String>,
}
