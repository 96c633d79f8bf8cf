use std::cmp::Ordering;

use jetset_types::{AirlineFilter, Flight, SortOrder};

/// Keep flights of the filtered airline, in their original relative order.
///
/// `AirlineFilter::All` returns every element. No match yields an empty vector.
pub fn filter_by_airline<T>(dataset: &[T], filter: &AirlineFilter) -> Vec<T>
where
    T: AsRef<Flight> + Clone,
{
    dataset
        .iter()
        .filter(|flight| filter.matches(&flight.as_ref().airline))
        .cloned()
        .collect()
}

/// Order flights by price into a new vector; the input is left untouched.
///
/// Stable: equal prices keep their input order. Ordering is total, so a NaN
/// price sorts after every real price when ascending (first when descending).
pub fn sort_by_price<T>(dataset: &[T], order: SortOrder) -> Vec<T>
where
    T: AsRef<Flight> + Clone,
{
    let mut sorted = dataset.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::PriceAscending => sorted.sort_by(|a, b| compare_price(a.as_ref(), b.as_ref())),
        SortOrder::PriceDescending => sorted.sort_by(|a, b| compare_price(b.as_ref(), a.as_ref())),
    }
    sorted
}

fn compare_price(a: &Flight, b: &Flight) -> Ordering {
    a.price.total_cmp(&b.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetset_testing::fixtures::flight;
    use std::sync::Arc;

    fn ids(flights: &[Flight]) -> Vec<String> {
        flights.iter().map(|f| f.id.to_string()).collect()
    }

    fn dataset() -> Vec<Flight> {
        vec![
            flight(1, "JetSpice", 2500.0),
            flight(2, "Air India", 3000.0),
            flight(3, "JetSpice", 1800.0),
            flight(4, "IndiGo", 2500.0),
            flight(5, "Air India", 1800.0),
        ]
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let result = filter_by_airline(&dataset(), &AirlineFilter::airline("Air India"));
        assert_eq!(ids(&result), vec!["2", "5"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let result = filter_by_airline(&dataset(), &AirlineFilter::All);
        assert_eq!(result, dataset());
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let result = filter_by_airline(&dataset(), &AirlineFilter::airline("NoSuchAirline"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let result = filter_by_airline(&dataset(), &AirlineFilter::airline("jetspice"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sort_none_keeps_input_order() {
        let result = sort_by_price(&dataset(), SortOrder::None);
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_sort_ascending_is_stable() {
        let result = sort_by_price(&dataset(), SortOrder::PriceAscending);
        assert_eq!(ids(&result), vec!["3", "5", "1", "4", "2"]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let result = sort_by_price(&dataset(), SortOrder::PriceDescending);
        assert_eq!(ids(&result), vec!["2", "1", "4", "3", "5"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let input = dataset();
        let _ = sort_by_price(&input, SortOrder::PriceDescending);
        assert_eq!(ids(&input), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_nan_price_sorts_last_ascending() {
        let mut odd = flight(9, "JetSpice", 0.0);
        odd.price = f64::NAN;
        let input = vec![flight(1, "A", 300.0), odd, flight(2, "A", 100.0)];

        let ascending = sort_by_price(&input, SortOrder::PriceAscending);
        let descending = sort_by_price(&input, SortOrder::PriceDescending);

        assert_eq!(ids(&ascending), vec!["2", "1", "9"]);
        assert_eq!(ids(&descending), vec!["9", "1", "2"]);
    }

    #[test]
    fn test_works_on_shared_handles() {
        let shared: Vec<Arc<Flight>> = dataset().into_iter().map(Arc::new).collect();

        let result = sort_by_price(&shared, SortOrder::PriceAscending);

        assert!(Arc::ptr_eq(&result[0], &shared[2]));
        assert_eq!(Arc::strong_count(&shared[2]), 2);
    }
}
