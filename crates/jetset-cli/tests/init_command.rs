//! Init Command Tests
//!
//! `jetset init` writes `config.toml` into the data directory and refuses to
//! overwrite it without `--force`.

use anyhow::Result;
use jetset_runtime::{Config, DEFAULT_ENDPOINT};
use jetset_testing::TestWorld;

#[test]
fn test_init_writes_endpoint() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "init",
        "--endpoint",
        "https://feed.example/flights",
        "--format",
        "json",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json()?;
    assert_eq!(json["content"]["outcome"]["status"], "written");
    assert_eq!(json["badge"]["level"], "success");

    let config = Config::load_from(&Config::path_in(world.data_dir()))?;
    assert_eq!(
        config.feed.endpoint.as_deref(),
        Some("https://feed.example/flights")
    );

    Ok(())
}

#[test]
fn test_init_defaults_endpoint() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init"])?;

    assert!(result.success());
    assert!(result.stdout.contains("Config written"));
    let config = Config::load_from(&Config::path_in(world.data_dir()))?;
    assert_eq!(config.endpoint(None), DEFAULT_ENDPOINT);

    Ok(())
}

#[test]
fn test_init_keeps_existing_config() -> Result<()> {
    // Given: An existing config
    let world = TestWorld::new().with_endpoint("https://old.example/flights");

    // When: init runs again without --force
    let result = world.run(&[
        "init",
        "--endpoint",
        "https://new.example/flights",
        "--format",
        "json",
    ])?;

    // Then: Nothing is overwritten
    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["outcome"]["status"], "kept_existing");
    assert_eq!(json["content"]["endpoint"], "https://old.example/flights");

    let config = Config::load_from(&Config::path_in(world.data_dir()))?;
    assert_eq!(
        config.feed.endpoint.as_deref(),
        Some("https://old.example/flights")
    );

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let world = TestWorld::new().with_endpoint("https://old.example/flights");

    let result = world.run(&["init", "--endpoint", "./flights.json", "--force"])?;

    assert!(result.success());
    let config = Config::load_from(&Config::path_in(world.data_dir()))?;
    assert_eq!(config.feed.endpoint.as_deref(), Some("./flights.json"));

    Ok(())
}
