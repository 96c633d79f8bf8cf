//! One-shot feed loading.
//!
//! `FetchCoordinator::load` consumes the coordinator, so a second attempt is
//! impossible by construction. There is no retry and no partial result: the
//! outcome is either the full flight list or a single `FetchError`.

use std::fmt;
use std::path::PathBuf;

use jetset_types::Flight;
use serde_json::Value;

/// Result of the single feed load
pub type FetchOutcome = std::result::Result<Vec<Flight>, FetchError>;

/// Why the feed could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Valid JSON whose top level is not an array
    MalformedPayload,
    /// Transport failure, non-success status, invalid JSON or undecodable records.
    /// The cause is for logs; users only see the generic message.
    Unavailable(String),
}

impl FetchError {
    /// Message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::MalformedPayload => "Data received in incorrect format",
            FetchError::Unavailable(_) => "An error occurred. Try again later!",
        }
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            FetchError::MalformedPayload => None,
            FetchError::Unavailable(cause) => Some(cause),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for FetchError {}

/// Where the feed is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Http { url: String },
    File { path: PathBuf },
}

impl FeedSource {
    /// `http://` and `https://` endpoints are fetched over HTTP; `file://` URLs
    /// and anything else are read as a local path.
    pub fn parse(endpoint: &str) -> Self {
        let endpoint = endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return FeedSource::Http {
                url: endpoint.to_string(),
            };
        }

        let path = endpoint.strip_prefix("file://").unwrap_or(endpoint);
        FeedSource::File {
            path: PathBuf::from(path),
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Http { url } => write!(f, "{}", url),
            FeedSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Performs the single load of the flight feed
pub struct FetchCoordinator {
    source: FeedSource,
    client: reqwest::Client,
}

impl FetchCoordinator {
    pub fn new(source: FeedSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Load and decode the feed.
    ///
    /// Dropping the returned future before completion discards the load.
    pub async fn load(self) -> FetchOutcome {
        tracing::info!(source = %self.source, "loading flight feed");

        let outcome = match self.read_body().await {
            Ok(body) => decode_feed(&body),
            Err(err) => Err(err),
        };

        match &outcome {
            Ok(flights) => tracing::info!(count = flights.len(), "flight feed loaded"),
            Err(err) => tracing::warn!(
                error = %err,
                cause = err.cause().unwrap_or("payload is not an array"),
                "flight feed failed"
            ),
        }

        outcome
    }

    async fn read_body(&self) -> std::result::Result<Vec<u8>, FetchError> {
        match &self.source {
            FeedSource::Http { url } => {
                let response = self
                    .client
                    .get(url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await
                    .map_err(|e| FetchError::Unavailable(format!("Request failed: {}", e)))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Unavailable(format!("HTTP {}", status)));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| FetchError::Unavailable(format!("Read failed: {}", e)))?;
                Ok(body.to_vec())
            }
            FeedSource::File { path } => tokio::fs::read(path).await.map_err(|e| {
                FetchError::Unavailable(format!("Read {} failed: {}", path.display(), e))
            }),
        }
    }
}

/// Decode a feed body.
///
/// Invalid JSON is `Unavailable`; valid JSON that is not an array is
/// `MalformedPayload`; an array whose elements are not flights is `Unavailable`.
pub fn decode_feed(body: &[u8]) -> FetchOutcome {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::Unavailable(format!("Invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(FetchError::MalformedPayload);
    }

    serde_json::from_value(value)
        .map_err(|e| FetchError::Unavailable(format!("Invalid flight record: {}", e)))
}
