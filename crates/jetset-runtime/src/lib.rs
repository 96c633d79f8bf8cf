pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod load_state;

pub use catalog::Catalog;
pub use config::{Config, FeedConfig, DEFAULT_ENDPOINT, resolve_data_dir};
pub use error::{Error, Result};
pub use fetch::{FeedSource, FetchCoordinator, FetchError, FetchOutcome, decode_feed};
pub use load_state::LoadState;
