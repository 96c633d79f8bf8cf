//! Testing infrastructure for jetset tests.
//!
//! - `fixtures`: flight builders and canned feeds
//! - `server`: one-shot local HTTP feed server
//! - `world`: isolated data dir + feed file for CLI integration tests
//! - `assertions`: checks over `list --format json` output

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod world;

pub use server::FeedServer;
pub use world::{CliResult, TestWorld};
