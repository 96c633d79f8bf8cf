use std::path::Path;

use anyhow::{Context, Result};
use jetset_runtime::{Config, DEFAULT_ENDPOINT, FeedConfig};

use crate::presentation::presenters::present_init_result;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer, StatusBadge};

pub fn handle(data_dir: &Path, endpoint: Option<String>, force: bool, json: bool) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    if config_path.exists() && !force {
        let existing = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;
        let view_model = present_init_result(&config_path, existing.endpoint(None), false);
        let result = CommandResultViewModel::new(view_model)
            .with_badge(StatusBadge::info("Config unchanged (use --force to overwrite)"));
        return ConsoleRenderer::new(json).render(result);
    }

    let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let config = Config {
        feed: FeedConfig {
            endpoint: Some(endpoint.clone()),
        },
    };
    config
        .save_to(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!(path = %config_path.display(), endpoint = %endpoint, "config written");

    let view_model = present_init_result(&config_path, &endpoint, true);
    let result =
        CommandResultViewModel::new(view_model).with_badge(StatusBadge::success("Config written"));
    ConsoleRenderer::new(json).render(result)
}
