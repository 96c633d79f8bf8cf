use std::collections::HashSet;

use jetset_types::{Flight, FlightId};

/// Which flight cards are expanded.
///
/// Keyed by flight id rather than row position, so the state follows a
/// flight across re-sorting. Lives only as long as the browser session.
#[derive(Debug, Default, Clone)]
pub struct DisclosureState {
    expanded: HashSet<FlightId>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &FlightId) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one card; returns the new state
    pub fn toggle(&mut self, id: &FlightId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Forget cards that are no longer displayed
    pub fn retain_displayed<T: AsRef<Flight>>(&mut self, displayed: &[T]) {
        let visible: HashSet<&FlightId> = displayed.iter().map(|f| &f.as_ref().id).collect();
        self.expanded.retain(|id| visible.contains(id));
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}
