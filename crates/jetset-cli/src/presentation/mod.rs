//! # Presentation Layer
//!
//! Everything between the catalog (`jetset_runtime::Catalog`) and the terminal.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View / Renderer ] --> [ Output ]
//!  (Controller)     (Converter)       (Contract)        (Layout, style)     (Console/JSON/TUI)
//! ```
//!
//! ## Directory Guide
//!
//! * `view_models/`: pure data, `Serialize`, no calculation. Never exposes
//!   `jetset_types` structs directly.
//! * `presenters/`: pure functions from catalog/UI state to view models.
//! * `views/`: `fmt::Display` text views and Ratatui widgets. Only layout and color.
//! * `renderers/`: output drivers. `console` prints command results (plain or JSON);
//!   `tui` runs the interactive browser and owns its UI state.
//! * `formatters/`: small shared string helpers (dates, prices).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
