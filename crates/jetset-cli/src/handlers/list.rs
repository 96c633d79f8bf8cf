use anyhow::Result;
use jetset_types::{AirlineFilter, SortOrder};

use crate::presentation::presenters::present_flight_list;
use crate::presentation::{
    CommandResultViewModel, ConsoleRenderer, Guidance, Renderer, StatusBadge,
};

pub fn handle(
    endpoint: &str,
    sort: Option<SortOrder>,
    airline: Option<String>,
    json: bool,
) -> Result<()> {
    let mut catalog = super::load_catalog(endpoint)?;

    if let Some(order) = sort {
        catalog.set_sort_order(order)?;
    }
    let filtered = airline.is_some();
    catalog.set_airline_filter(AirlineFilter::from(airline))?;

    let view_model = present_flight_list(&catalog);
    let mut result = CommandResultViewModel::new(view_model);

    if catalog.displayed().is_empty() && filtered {
        result = result
            .with_badge(StatusBadge::warning("No flights for that airline"))
            .with_suggestion(
                Guidance::new("Airline names are exact and case-sensitive")
                    .with_command("jetset airlines"),
            );
    }

    ConsoleRenderer::new(json).render(result)
}
