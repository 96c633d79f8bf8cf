//! Fixtures for sample flight data.

use jetset_types::{Flight, FlightId, Timestamp};

/// Fluent builder for a single flight with plausible defaults.
pub struct FlightBuilder {
    flight: Flight,
}

impl FlightBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            flight: Flight {
                id: FlightId::Number(id),
                airline: "JetSpice".to_string(),
                aircraft: "Airbus A320".to_string(),
                flight_number: "JS100".to_string(),
                price: 1000.0,
                origin: "Delhi".to_string(),
                destination: "Mumbai".to_string(),
                arrival_time: Timestamp::parse("2024-02-05T10:00:00"),
                departure_time: Timestamp::parse("2024-02-05T08:00:00"),
                duration: "2 hours".to_string(),
                gate: "Gate 1".to_string(),
                seats_available: 50,
            },
        }
    }

    /// Replace the numeric id with a string id
    pub fn text_id(mut self, id: &str) -> Self {
        self.flight.id = FlightId::from(id);
        self
    }

    pub fn airline(mut self, airline: &str) -> Self {
        self.flight.airline = airline.to_string();
        self
    }

    pub fn aircraft(mut self, aircraft: &str) -> Self {
        self.flight.aircraft = aircraft.to_string();
        self
    }

    pub fn flight_number(mut self, number: &str) -> Self {
        self.flight.flight_number = number.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.flight.price = price;
        self
    }

    pub fn route(mut self, origin: &str, destination: &str) -> Self {
        self.flight.origin = origin.to_string();
        self.flight.destination = destination.to_string();
        self
    }

    pub fn times(mut self, departure: &str, arrival: &str) -> Self {
        self.flight.departure_time = Timestamp::parse(departure);
        self.flight.arrival_time = Timestamp::parse(arrival);
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.flight.duration = duration.to_string();
        self
    }

    pub fn gate(mut self, gate: &str) -> Self {
        self.flight.gate = gate.to_string();
        self
    }

    pub fn seats(mut self, seats: u32) -> Self {
        self.flight.seats_available = seats;
        self
    }

    pub fn build(self) -> Flight {
        self.flight
    }
}

/// Shorthand for the fields the view pipeline cares about.
pub fn flight(id: u64, airline: &str, price: f64) -> Flight {
    FlightBuilder::new(id).airline(airline).price(price).build()
}

/// A small realistic catalog with repeated airlines and prices.
///
/// | id | airline   | price |
/// |----|-----------|-------|
/// | 1  | JetSpice  | 2500  |
/// | 2  | Air India | 3000  |
/// | 3  | JetSpice  | 2000  |
/// | 4  | IndiGo    | 1800  |
/// | 5  | Air India | 2500  |
/// | 6  | Vistara   | 4500  |
pub fn sample_flights() -> Vec<Flight> {
    vec![
        FlightBuilder::new(1)
            .airline("JetSpice")
            .aircraft("Airbus A320")
            .flight_number("JS123")
            .price(2500.0)
            .route("Delhi", "Mumbai")
            .times("2024-02-05T08:00:00", "2024-02-05T10:00:00")
            .duration("2 hours")
            .gate("Gate 1")
            .seats(50)
            .build(),
        FlightBuilder::new(2)
            .airline("Air India")
            .aircraft("Boeing 737")
            .flight_number("AI456")
            .price(3000.0)
            .route("Mumbai", "Bangalore")
            .times("2024-02-05T12:00:00", "2024-02-05T14:30:00")
            .duration("2 hours 30 minutes")
            .gate("Gate 2")
            .seats(80)
            .build(),
        FlightBuilder::new(3)
            .airline("JetSpice")
            .aircraft("Airbus A320")
            .flight_number("JS789")
            .price(2000.0)
            .route("Bangalore", "Kolkata")
            .times("2024-02-05T16:00:00", "2024-02-05T18:15:00")
            .duration("2 hours 15 minutes")
            .gate("Gate 3")
            .seats(30)
            .build(),
        FlightBuilder::new(4)
            .airline("IndiGo")
            .aircraft("ATR 72")
            .flight_number("6E234")
            .price(1800.0)
            .route("Chennai", "Hyderabad")
            .times("2024-02-06T07:00:00", "2024-02-06T08:20:00")
            .duration("1 hour 20 minutes")
            .gate("Gate 4")
            .seats(20)
            .build(),
        FlightBuilder::new(5)
            .airline("Air India")
            .aircraft("Airbus A321")
            .flight_number("AI567")
            .price(2500.0)
            .route("Kolkata", "Delhi")
            .times("2024-02-06T09:30:00", "2024-02-06T12:00:00")
            .duration("2 hours 30 minutes")
            .gate("Gate 5")
            .seats(65)
            .build(),
        FlightBuilder::new(6)
            .airline("Vistara")
            .aircraft("Boeing 787")
            .flight_number("UK890")
            .price(4500.0)
            .route("Hyderabad", "Pune")
            .times("2024-02-06T13:00:00", "2024-02-06T14:30:00")
            .duration("1 hour 30 minutes")
            .gate("Gate 6")
            .seats(120)
            .build(),
    ]
}

/// Serialize flights the way the feed would send them.
pub fn feed_json(flights: &[Flight]) -> String {
    serde_json::to_string_pretty(flights).expect("flights serialize")
}

/// Two-record feed: `A` at 100 then `B` at 50.
pub const TWO_FLIGHT_FEED: &str = r#"[
  {"id": 1, "airline": "A", "aircraft": "Airbus A320", "flightNumber": "A1", "price": 100,
   "origin": "Delhi", "destination": "Mumbai", "arrivalTime": "2024-02-05T10:00:00",
   "departureTime": "2024-02-05T08:00:00", "duration": "2 hours", "gate": "Gate 1", "seatsAvailable": 10},
  {"id": 2, "airline": "B", "aircraft": "Boeing 737", "flightNumber": "B2", "price": 50,
   "origin": "Mumbai", "destination": "Goa", "arrivalTime": "2024-02-05T13:00:00",
   "departureTime": "2024-02-05T12:00:00", "duration": "1 hour", "gate": "Gate 2", "seatsAvailable": 20}
]"#;

/// Valid JSON that is not an array of flights.
pub const MALFORMED_FEED: &str = r#"{"error":"bad"}"#;

/// Not JSON at all.
pub const GARBAGE_FEED: &str = "<html>502 Bad Gateway</html>";
