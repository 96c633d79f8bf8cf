//! TestWorld pattern for declarative CLI integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing feed files and `config.toml`
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use jetset_testing::TestWorld;
/// use jetset_testing::fixtures::TWO_FLIGHT_FEED;
///
/// let world = TestWorld::new().with_feed(TWO_FLIGHT_FEED);
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    feed_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".jetset");
        let feed_path = temp_dir.path().join("feed").join("flights.json");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            feed_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.jetset).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the feed file written by `with_feed`.
    pub fn feed_path(&self) -> &Path {
        &self.feed_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the feed body and point the configured endpoint at it.
    pub fn with_feed(self, body: &str) -> Self {
        if let Some(parent) = self.feed_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create feed dir");
        }
        std::fs::write(&self.feed_path, body).expect("Failed to write feed");
        let endpoint = self.feed_path.display().to_string();
        self.with_endpoint(&endpoint)
    }

    /// Write `config.toml` with the given feed endpoint.
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        let config = format!("[feed]\nendpoint = {:?}\n", endpoint);
        std::fs::write(self.data_dir.join("config.toml"), config).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. `Command::new(env!("CARGO_BIN_EXE_jetset"))`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("JETSET_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// Uses `Command::cargo_bin()`, which needs the binary built by `cargo test`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("jetset")
            .map_err(|e| anyhow::anyhow!("Failed to find jetset binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI invocation.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
