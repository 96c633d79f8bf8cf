use anyhow::Result;

use crate::presentation::presenters::present_airline_list;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};

pub fn handle(endpoint: &str, json: bool) -> Result<()> {
    let catalog = super::load_catalog(endpoint)?;

    let result = CommandResultViewModel::new(present_airline_list(&catalog));
    ConsoleRenderer::new(json).render(result)
}
