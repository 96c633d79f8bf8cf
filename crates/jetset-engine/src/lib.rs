// Engine module - pure view derivation over the raw catalog
// This layer sits between the flight model (types) and the catalog controller (runtime)

mod airlines;
mod view;

pub use airlines::known_airlines;
pub use view::{filter_by_airline, sort_by_price};

use jetset_types::{AirlineFilter, Flight, SortOrder};

// Façade API - the only composition the runtime should use

/// Derive the displayed sequence: filter the raw dataset, then sort the result.
///
/// Always evaluated against `raw`, never against a previously derived view,
/// so toggling either parameter cannot compound stale state.
pub fn derive_view<T>(raw: &[T], filter: &AirlineFilter, order: SortOrder) -> Vec<T>
where
    T: AsRef<Flight> + Clone,
{
    let filtered = filter_by_airline(raw, filter);
    sort_by_price(&filtered, order)
}
