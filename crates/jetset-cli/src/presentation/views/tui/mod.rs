//! TUI View Components
//!
//! Ratatui widgets for the flight browser. Each component is a thin wrapper
//! around a view model reference and does layout and color only.

pub mod alert;
pub mod flight_list;
pub mod header;
pub mod loading;
pub mod selector;
pub mod status_bar;

pub use alert::AlertView;
pub use flight_list::{FlightCardView, FlightListView};
pub use header::HeaderView;
pub use loading::LoadingView;
pub use selector::SelectorView;
pub use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
