use std::collections::HashSet;

use jetset_types::Flight;

/// Distinct airline names in order of first occurrence
pub fn known_airlines<T: AsRef<Flight>>(dataset: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    dataset
        .iter()
        .map(|flight| flight.as_ref().airline.as_str())
        .filter(|airline| seen.insert(*airline))
        .map(str::to_string)
        .collect()
}
