use jetset_runtime::Catalog;
use jetset_types::Flight;

use crate::presentation::formatters::{format_flight_time, format_price};
use crate::presentation::view_models::{
    AirlineListViewModel, FlightCardViewModel, FlightListViewModel,
};

pub fn present_flight_card(flight: &Flight, expanded: bool) -> FlightCardViewModel {
    FlightCardViewModel {
        id: flight.id.to_string(),
        airline: flight.airline.clone(),
        aircraft: flight.aircraft.clone(),
        flight_number: flight.flight_number.clone(),
        price: flight.price,
        price_label: format_price(flight.price),
        origin: flight.origin.clone(),
        destination: flight.destination.clone(),
        departure: format_flight_time(&flight.departure_time),
        arrival: format_flight_time(&flight.arrival_time),
        duration: flight.duration.clone(),
        gate: flight.gate.clone(),
        seats_available: flight.seats_available,
        expanded,
    }
}

/// Whole displayed sequence, collapsed, for console output
pub fn present_flight_list(catalog: &Catalog) -> FlightListViewModel {
    FlightListViewModel {
        sort_order: catalog.sort_order(),
        sort_label: catalog.sort_order().label().to_string(),
        airline_filter: catalog.airline_filter().name().map(str::to_string),
        total: catalog.raw().len(),
        flights: catalog
            .displayed()
            .iter()
            .map(|flight| present_flight_card(flight, false))
            .collect(),
    }
}

pub fn present_airline_list(catalog: &Catalog) -> AirlineListViewModel {
    AirlineListViewModel {
        airlines: catalog.known_airlines().to_vec(),
    }
}
