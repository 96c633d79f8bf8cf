pub mod airlines;
pub mod browse;
pub mod init;
pub mod list;

use anyhow::Result;
use jetset_runtime::{Catalog, FeedSource, FetchCoordinator};

/// Load the feed once on a current-thread runtime and seed a fresh catalog.
///
/// A fetch failure surfaces as the user-facing `FetchError` message.
pub(crate) fn load_catalog(endpoint: &str) -> Result<Catalog> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let coordinator = FetchCoordinator::new(FeedSource::parse(endpoint));
    let flights = runtime.block_on(coordinator.load())?;

    let mut catalog = Catalog::new();
    catalog.seed(flights)?;
    Ok(catalog)
}
