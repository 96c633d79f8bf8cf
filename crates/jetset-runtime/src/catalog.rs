//! Catalog State Controller
//!
//! Owns the raw dataset and the two view parameters, and is the only place
//! the displayed sequence is written. Every setter re-derives the displayed
//! sequence from the raw dataset through `jetset_engine::derive_view`.

use std::sync::Arc;

use jetset_engine::{derive_view, known_airlines};
use jetset_types::{AirlineFilter, Flight, SortOrder};

use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct Catalog {
    /// Set once by `seed`, never reordered
    raw: Option<Vec<Arc<Flight>>>,
    known_airlines: Vec<String>,
    sort_order: SortOrder,
    airline_filter: AirlineFilter,
    displayed: Vec<Arc<Flight>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the loaded flights. Only the first seed is accepted.
    pub fn seed(&mut self, flights: Vec<Flight>) -> Result<()> {
        if self.raw.is_some() {
            return Err(Error::InvalidOperation(
                "catalog is already seeded".to_string(),
            ));
        }

        let raw: Vec<Arc<Flight>> = flights.into_iter().map(Arc::new).collect();
        self.known_airlines = known_airlines(&raw);
        self.raw = Some(raw);
        self.rederive();

        tracing::debug!(
            flights = self.raw().len(),
            airlines = self.known_airlines.len(),
            "catalog seeded"
        );
        Ok(())
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Result<()> {
        if !self.is_seeded() {
            return Err(Error::NotSeeded);
        }
        self.sort_order = order;
        self.rederive();
        Ok(())
    }

    /// Set a filter, or clear it with `AirlineFilter::All`.
    pub fn set_airline_filter(&mut self, filter: AirlineFilter) -> Result<()> {
        if !self.is_seeded() {
            return Err(Error::NotSeeded);
        }
        self.airline_filter = filter;
        self.rederive();
        Ok(())
    }

    pub fn is_seeded(&self) -> bool {
        self.raw.is_some()
    }

    /// Raw dataset in feed order (empty before seeding)
    pub fn raw(&self) -> &[Arc<Flight>] {
        self.raw.as_deref().unwrap_or(&[])
    }

    pub fn displayed(&self) -> &[Arc<Flight>] {
        &self.displayed
    }

    pub fn known_airlines(&self) -> &[String] {
        &self.known_airlines
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn airline_filter(&self) -> &AirlineFilter {
        &self.airline_filter
    }

    fn rederive(&mut self) {
        let Some(raw) = &self.raw else {
            return;
        };
        self.displayed = derive_view(raw, &self.airline_filter, self.sort_order);

        tracing::debug!(
            sort = ?self.sort_order,
            filter = %self.airline_filter,
            displayed = self.displayed.len(),
            "displayed sequence re-derived"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetset_testing::fixtures::{flight, sample_flights};

    fn ids(flights: &[Arc<Flight>]) -> Vec<String> {
        flights.iter().map(|f| f.id.to_string()).collect()
    }

    fn seeded(flights: Vec<Flight>) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.seed(flights).unwrap();
        catalog
    }

    fn two_flights() -> Vec<Flight> {
        vec![flight(1, "A", 100.0), flight(2, "B", 50.0)]
    }

    #[test]
    fn test_basic_load_keeps_feed_order() {
        let catalog = seeded(two_flights());

        assert_eq!(ids(catalog.displayed()), vec!["1", "2"]);
        assert_eq!(catalog.sort_order(), SortOrder::None);
        assert_eq!(catalog.airline_filter(), &AirlineFilter::All);
        assert_eq!(catalog.known_airlines(), ["A", "B"]);
    }

    #[test]
    fn test_sort_then_filter() {
        let mut catalog = seeded(two_flights());

        catalog.set_sort_order(SortOrder::PriceAscending).unwrap();
        assert_eq!(ids(catalog.displayed()), vec!["2", "1"]);

        catalog
            .set_airline_filter(AirlineFilter::airline("A"))
            .unwrap();
        assert_eq!(ids(catalog.displayed()), vec!["1"]);
    }

    #[test]
    fn test_unknown_airline_is_empty_not_error() {
        let mut catalog = seeded(two_flights());

        let result = catalog.set_airline_filter(AirlineFilter::airline("NoSuchAirline"));

        assert!(result.is_ok());
        assert!(catalog.displayed().is_empty());
    }

    #[test]
    fn test_clearing_filter_rederives_from_raw() {
        let mut catalog = seeded(sample_flights());
        catalog
            .set_sort_order(SortOrder::PriceDescending)
            .unwrap();
        catalog
            .set_airline_filter(AirlineFilter::airline("JetSpice"))
            .unwrap();
        assert_eq!(ids(catalog.displayed()), vec!["1", "3"]);

        catalog.set_airline_filter(AirlineFilter::All).unwrap();

        // Everything comes back, not just the previously displayed JetSpice rows
        assert_eq!(ids(catalog.displayed()), vec!["6", "2", "1", "5", "3", "4"]);
    }

    #[test]
    fn test_switching_filters_does_not_compound() {
        let mut catalog = seeded(sample_flights());

        catalog
            .set_airline_filter(AirlineFilter::airline("JetSpice"))
            .unwrap();
        catalog
            .set_airline_filter(AirlineFilter::airline("Air India"))
            .unwrap();

        assert_eq!(ids(catalog.displayed()), vec!["2", "5"]);
    }

    #[test]
    fn test_final_pair_decides_regardless_of_call_order() {
        let filter = AirlineFilter::airline("Air India");
        let order = SortOrder::PriceAscending;

        let mut sort_first = seeded(sample_flights());
        sort_first.set_sort_order(SortOrder::PriceDescending).unwrap();
        sort_first.set_sort_order(order).unwrap();
        sort_first.set_airline_filter(filter.clone()).unwrap();

        let mut filter_first = seeded(sample_flights());
        filter_first
            .set_airline_filter(AirlineFilter::airline("IndiGo"))
            .unwrap();
        filter_first.set_airline_filter(filter.clone()).unwrap();
        filter_first.set_sort_order(order).unwrap();

        assert_eq!(ids(sort_first.displayed()), vec!["5", "2"]);
        assert_eq!(ids(sort_first.displayed()), ids(filter_first.displayed()));
    }

    #[test]
    fn test_raw_dataset_is_never_reordered() {
        let mut catalog = seeded(sample_flights());

        catalog.set_sort_order(SortOrder::PriceAscending).unwrap();
        catalog
            .set_airline_filter(AirlineFilter::airline("JetSpice"))
            .unwrap();
        catalog.set_sort_order(SortOrder::PriceDescending).unwrap();

        assert_eq!(ids(catalog.raw()), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_selecting_active_order_is_idempotent() {
        let mut catalog = seeded(sample_flights());
        catalog.set_sort_order(SortOrder::PriceAscending).unwrap();
        let before = ids(catalog.displayed());

        catalog.set_sort_order(SortOrder::PriceAscending).unwrap();

        assert_eq!(ids(catalog.displayed()), before);
    }

    #[test]
    fn test_setters_rejected_before_seed() {
        let mut catalog = Catalog::new();

        assert!(matches!(
            catalog.set_sort_order(SortOrder::PriceAscending),
            Err(Error::NotSeeded)
        ));
        assert!(matches!(
            catalog.set_airline_filter(AirlineFilter::airline("A")),
            Err(Error::NotSeeded)
        ));
        assert_eq!(catalog.sort_order(), SortOrder::None);
        assert_eq!(catalog.airline_filter(), &AirlineFilter::All);
        assert!(catalog.displayed().is_empty());
    }

    #[test]
    fn test_second_seed_rejected() {
        let mut catalog = seeded(two_flights());

        let result = catalog.seed(vec![flight(9, "C", 1.0)]);

        assert!(matches!(result, Err(Error::InvalidOperation(_))));
        assert_eq!(ids(catalog.raw()), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_feed_is_a_valid_catalog() {
        let mut catalog = seeded(Vec::new());

        assert!(catalog.is_seeded());
        assert!(catalog.displayed().is_empty());
        assert!(catalog.known_airlines().is_empty());
        assert!(catalog.set_sort_order(SortOrder::PriceAscending).is_ok());
    }

    #[test]
    fn test_displayed_shares_raw_records() {
        let catalog = seeded(two_flights());
        assert!(Arc::ptr_eq(&catalog.displayed()[0], &catalog.raw()[0]));
    }
}
