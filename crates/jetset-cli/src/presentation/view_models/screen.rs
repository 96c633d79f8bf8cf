//! View models for the interactive browser screen.
//!
//! Built fresh on every frame by `presenters::screen`; the TUI views only read them.

use serde::Serialize;

use super::catalog::FlightCardViewModel;
use super::common::StatusLevel;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogScreenViewModel {
    pub header: HeaderViewModel,
    pub body: ScreenBody,
    pub selector: Option<SelectorViewModel>,
    pub alert: Option<AlertViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub sort_label: String,
    pub filter_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenBody {
    Loading {
        message: String,
        spinner: String,
    },
    Flights {
        /// Only the cards inside the visible window
        cards: Vec<FlightCardViewModel>,
        /// Index into `cards`
        selected: Option<usize>,
        empty_message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorViewModel {
    pub title: String,
    pub options: Vec<SelectorOptionViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOptionViewModel {
    pub label: String,
    /// Currently applied choice
    pub active: bool,
    /// Under the keyboard cursor
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertViewModel {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub position: Option<String>,
    pub key_hints: Vec<(String, String)>,
}
