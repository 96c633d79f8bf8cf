//! Presenters for the interactive browser.
//!
//! Each function maps one slice of catalog or UI state to a screen view model.
//! The TUI renderer assembles them into a `CatalogScreenViewModel` per frame.

use std::ops::Range;
use std::sync::Arc;

use jetset_runtime::{Catalog, FetchError, LoadState};
use jetset_types::{AirlineFilter, Flight, FlightId, SortOrder};

use super::catalog::present_flight_card;
use crate::presentation::view_models::{
    AlertViewModel, HeaderViewModel, ScreenBody, SelectorOptionViewModel, SelectorViewModel,
    StatusBarViewModel, StatusLevel,
};

pub const TITLE: &str = "JetSetGo";
pub const REMOVE_FILTER_LABEL: &str = "Remove Filter";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn present_header(catalog: &Catalog) -> HeaderViewModel {
    HeaderViewModel {
        title: TITLE.to_string(),
        sort_label: catalog.sort_order().label().to_string(),
        filter_label: catalog.airline_filter().to_string(),
    }
}

pub fn present_loading(source: &str, tick: usize) -> ScreenBody {
    ScreenBody::Loading {
        message: format!("Loading flights from {}", source),
        spinner: SPINNER_FRAMES[tick % SPINNER_FRAMES.len()].to_string(),
    }
}

/// Cards for the visible `window` of `displayed`. `selected` is an index into
/// `displayed`.
pub fn present_flight_page(
    displayed: &[Arc<Flight>],
    airline_filter: &AirlineFilter,
    window: Range<usize>,
    selected: Option<usize>,
    is_expanded: impl Fn(&FlightId) -> bool,
) -> ScreenBody {
    let start = window.start.min(displayed.len());
    let end = window.end.min(displayed.len());

    let cards = displayed[start..end]
        .iter()
        .map(|flight| present_flight_card(flight, is_expanded(&flight.id)))
        .collect();

    ScreenBody::Flights {
        cards,
        selected: selected
            .filter(|index| (start..end).contains(index))
            .map(|index| index - start),
        empty_message: empty_message(airline_filter).to_string(),
    }
}

fn empty_message(airline_filter: &AirlineFilter) -> &'static str {
    match airline_filter {
        AirlineFilter::All => "No flights in the feed",
        AirlineFilter::Airline(_) => "No flights match the current filter",
    }
}

pub fn present_sort_selector(current: SortOrder, highlighted: usize) -> SelectorViewModel {
    SelectorViewModel {
        title: "Sort By".to_string(),
        options: SortOrder::CHOICES
            .iter()
            .enumerate()
            .map(|(index, order)| SelectorOptionViewModel {
                label: order.label().to_string(),
                active: *order == current,
                highlighted: index == highlighted,
            })
            .collect(),
    }
}

/// Known airlines followed by a final "Remove Filter" entry
pub fn present_filter_selector(
    airlines: &[String],
    current: &AirlineFilter,
    highlighted: usize,
) -> SelectorViewModel {
    let mut options: Vec<SelectorOptionViewModel> = airlines
        .iter()
        .enumerate()
        .map(|(index, airline)| SelectorOptionViewModel {
            label: airline.clone(),
            active: current.name() == Some(airline.as_str()),
            highlighted: index == highlighted,
        })
        .collect();

    options.push(SelectorOptionViewModel {
        label: REMOVE_FILTER_LABEL.to_string(),
        active: *current == AirlineFilter::All,
        highlighted: highlighted == airlines.len(),
    });

    SelectorViewModel {
        title: "Filter By Airline".to_string(),
        options,
    }
}

pub fn present_alert(error: &FetchError) -> AlertViewModel {
    AlertViewModel {
        title: "Error".to_string(),
        message: error.user_message().to_string(),
    }
}

pub fn present_status_bar(
    load_state: &LoadState,
    catalog: &Catalog,
    selected: Option<usize>,
    selector_open: bool,
) -> StatusBarViewModel {
    let (message, level) = match load_state {
        LoadState::Loading => ("Loading...".to_string(), StatusLevel::Info),
        LoadState::Failed(err) => (err.user_message().to_string(), StatusLevel::Error),
        LoadState::Loaded if catalog.displayed().is_empty() => (
            format!("0 of {} flights", catalog.raw().len()),
            StatusLevel::Warning,
        ),
        LoadState::Loaded => (
            format!(
                "{} of {} flights",
                catalog.displayed().len(),
                catalog.raw().len()
            ),
            StatusLevel::Success,
        ),
    };

    let position = selected.map(|index| format!("{}/{}", index + 1, catalog.displayed().len()));

    let hints: &[(&str, &str)] = if selector_open {
        &[("↑/↓", " move"), ("Enter", " select"), ("Esc", " close")]
    } else if load_state.is_loaded() {
        &[
            ("s", "ort"),
            ("f", "ilter"),
            ("Enter", " details"),
            ("q", "uit"),
        ]
    } else {
        &[("q", "uit")]
    };

    StatusBarViewModel {
        message,
        level,
        position,
        key_hints: hints
            .iter()
            .map(|(key, action)| (key.to_string(), action.to_string()))
            .collect(),
    }
}
