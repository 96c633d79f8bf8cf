// jetset: a terminal catalog over a single flight feed.
//
// The feed is loaded exactly once. The raw dataset is immutable after that
// and every sort or filter change re-derives the displayed list from it.
// Per-row UI state (disclosure, cursor) is keyed by flight id, never by row
// position, because re-derivation reorders and resizes the list.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
