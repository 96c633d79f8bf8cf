pub mod catalog;
pub mod common;
pub mod init;
pub mod result;
pub mod screen;

pub use catalog::{AirlineListViewModel, FlightCardViewModel, FlightListViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use init::{ConfigOutcome, InitResultViewModel};
pub use result::CommandResultViewModel;
pub use screen::{
    AlertViewModel, CatalogScreenViewModel, HeaderViewModel, ScreenBody, SelectorOptionViewModel,
    SelectorViewModel, StatusBarViewModel,
};

use std::fmt;

/// Console text view for a command result's content
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
