use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{AirlineListViewModel, CreateView, FlightListViewModel};

// --------------------------------------------------------
// Flight List View
// --------------------------------------------------------

impl CreateView for FlightListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(FlightListView { data: self })
    }
}

struct FlightListView<'a> {
    data: &'a FlightListViewModel,
}

impl<'a> fmt::Display for FlightListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            writeln!(f, "No flights to show.")?;
        } else {
            writeln!(
                f,
                "{:<6} {:<14} {:<10} {:<28} {:<16} {:<16} {:<12} PRICE",
                "ID", "AIRLINE", "FLIGHT", "ROUTE", "DEPARTURE", "ARRIVAL", "DURATION"
            )?;
            writeln!(f, "{}", "-".repeat(115))?;

            for card in &self.data.flights {
                writeln!(
                    f,
                    "{:<6} {:<14} {:<10} {:<28} {:<16} {:<16} {:<12} {}",
                    card.id,
                    card.airline,
                    card.flight_number,
                    format!("{} -> {}", card.origin, card.destination),
                    card.departure,
                    card.arrival,
                    card.duration,
                    card.price_label.green()
                )?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "Showing {} of {} flights | sort: {}",
            self.data.flights.len(),
            self.data.total,
            self.data.sort_label
        )?;
        if let Some(airline) = &self.data.airline_filter {
            write!(f, " | airline: {}", airline)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Airline List View
// --------------------------------------------------------

impl CreateView for AirlineListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AirlineListView { data: self })
    }
}

struct AirlineListView<'a> {
    data: &'a AirlineListViewModel,
}

impl<'a> fmt::Display for AirlineListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.airlines.is_empty() {
            return writeln!(f, "No airlines in the feed.");
        }

        for airline in &self.data.airlines {
            writeln!(f, "{}", airline)?;
        }
        Ok(())
    }
}
