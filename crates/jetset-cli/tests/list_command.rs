//! List Command Tests
//!
//! End-to-end checks of `jetset list`: feed order, sort then filter through
//! the catalog, and the user-facing fetch error messages.

use anyhow::Result;
use assert_cmd::Command;
use jetset_testing::fixtures::{
    GARBAGE_FEED, MALFORMED_FEED, TWO_FLIGHT_FEED, feed_json, sample_flights,
};
use jetset_testing::{FeedServer, TestWorld, assertions};
use predicates::prelude::*;

#[test]
fn test_list_keeps_feed_order() -> Result<()> {
    // Given: A two-flight feed, A at 100 then B at 50
    let world = TestWorld::new().with_feed(TWO_FLIGHT_FEED);

    // When: Listing without sort or filter
    let result = world.run(&["list", "--format", "json"])?;

    // Then: Flights come back in feed order
    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json()?;
    assertions::assert_flight_ids(&json, &["1", "2"])?;
    assert_eq!(json["content"]["sort_order"], "none");
    assert_eq!(json["content"]["total"], 2);

    Ok(())
}

#[test]
fn test_list_sort_then_filter() -> Result<()> {
    let world = TestWorld::new().with_feed(TWO_FLIGHT_FEED);

    let sorted = world.run(&["list", "--sort", "asc", "--format", "json"])?;
    assertions::assert_flight_ids(&sorted.json()?, &["2", "1"])?;

    let filtered = world.run(&["list", "--sort", "asc", "--airline", "A", "--format", "json"])?;
    let json = filtered.json()?;
    assertions::assert_flight_ids(&json, &["1"])?;
    assert_eq!(json["content"]["airline_filter"], "A");

    Ok(())
}

#[test]
fn test_list_descending_is_stable() -> Result<()> {
    // Given: Flights 1 and 5 share a price of 2500
    let world = TestWorld::new().with_feed(&feed_json(&sample_flights()));

    let result = world.run(&["list", "--sort", "desc", "--format", "json"])?;

    // Then: Equal prices keep their feed order
    assertions::assert_flight_ids(&result.json()?, &["6", "2", "1", "5", "3", "4"])?;

    Ok(())
}

#[test]
fn test_unknown_airline_is_empty_not_error() -> Result<()> {
    let world = TestWorld::new().with_feed(TWO_FLIGHT_FEED);

    let result = world.run(&["list", "--airline", "NoSuchAirline", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_flight_ids(&json, &[])?;
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["suggestions"][0]["command"], "jetset airlines");

    Ok(())
}

#[test]
fn test_plain_output_lists_cards_and_summary() -> Result<()> {
    let world = TestWorld::new().with_feed(TWO_FLIGHT_FEED);

    let result = world.run(&["list", "--sort", "desc"])?;

    assert!(result.success());
    assert!(result.stdout.contains("Delhi -> Mumbai"));
    assert!(result.stdout.contains("Rs100"));
    assert!(result.stdout.contains("05/02/24 08:00"));
    assert!(
        result
            .stdout
            .contains("Showing 2 of 2 flights | sort: Price (Descending)")
    );

    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_malformed_feed_reports_format_error() {
    // Given: The feed is a JSON object, not an array
    let world = TestWorld::new().with_feed(MALFORMED_FEED);

    let mut cmd = Command::cargo_bin("jetset").unwrap();
    world.configure_command(&mut cmd).arg("list");

    // Then: Non-zero exit with the user-facing message and nothing on stdout
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Data received in incorrect format",
        ));
}

#[test]
#[allow(deprecated)]
fn test_unparsable_feed_is_generic_error() {
    let world = TestWorld::new().with_feed(GARBAGE_FEED);

    let mut cmd = Command::cargo_bin("jetset").unwrap();
    world.configure_command(&mut cmd).arg("list");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: An error occurred. Try again later!",
        ));
}

#[test]
fn test_missing_feed_file_is_generic_error() -> Result<()> {
    let world = TestWorld::new().with_endpoint("./does-not-exist.json");

    let result = world.run(&["list"])?;

    assert!(!result.success());
    assert!(
        result
            .stderr
            .contains("Error: An error occurred. Try again later!")
    );
    // The cause goes to the log, not the error line
    assert!(!result.stderr.contains("Error: Read"));

    Ok(())
}

#[test]
fn test_feed_flag_overrides_config() -> Result<()> {
    // Given: config.toml points at a malformed feed
    let world = TestWorld::new().with_feed(MALFORMED_FEED);
    let good_feed = world.temp_dir().join("good.json");
    std::fs::write(&good_feed, TWO_FLIGHT_FEED)?;

    // When: --feed names a good one
    let feed = good_feed.display().to_string();
    let result = world.run(&["list", "--feed", feed.as_str(), "--format", "json"])?;

    // Then: The flag wins
    assert!(result.success(), "stderr: {}", result.stderr);
    assertions::assert_flight_ids(&result.json()?, &["1", "2"])?;

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_over_http() -> Result<()> {
    let server = FeedServer::ok(TWO_FLIGHT_FEED).await?;
    let url = server.url();
    let world = TestWorld::new();

    // The CLI blocks on its own runtime; keep the server's runtime free
    let result = tokio::task::spawn_blocking(move || {
        world.run(&["list", "--feed", url.as_str(), "--sort", "asc", "--format", "json"])
    })
    .await??;

    assert!(result.success(), "stderr: {}", result.stderr);
    assertions::assert_flight_ids(&result.json()?, &["2", "1"])?;

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_http_error_status_is_generic_error() -> Result<()> {
    let server = FeedServer::start(500, "oops").await?;
    let url = server.url();
    let world = TestWorld::new();

    let result = tokio::task::spawn_blocking(move || world.run(&["list", "--feed", url.as_str()])).await??;

    assert!(!result.success());
    assert!(
        result
            .stderr
            .contains("Error: An error occurred. Try again later!")
    );

    Ok(())
}
