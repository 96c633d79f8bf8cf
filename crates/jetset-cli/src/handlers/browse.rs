use anyhow::Result;
use jetset_runtime::{Catalog, FeedSource, FetchCoordinator};

use crate::presentation::renderers::tui::{BrowseApp, TuiRenderer};

pub fn handle(endpoint: &str) -> Result<()> {
    let coordinator = FetchCoordinator::new(FeedSource::parse(endpoint));
    let app = BrowseApp::new(Catalog::new(), coordinator.source().to_string());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(TuiRenderer::new(app).run(coordinator.load()))
}
