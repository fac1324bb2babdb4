// Source module - loads the doctor directory once per session
//
// The directory is a single JSON array served from a fixed endpoint. It is
// fetched exactly once, in a background task, and handed to the TUI over a
// oneshot channel. There is no retry, refresh or cache invalidation.
//
// A source that is not an http(s) URL is read from disk instead, which is
// how offline demos and tests feed a directory in.

use crate::config::{Config, VERSION};
use crate::directory::DoctorRecord;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::oneshot;

/// Errors that can occur while loading the directory
#[derive(Debug)]
pub enum SourceError {
    /// Connection, TLS or timeout failure
    Network(String),
    /// Endpoint answered with a non-success status
    Status { status: u16, url: String },
    /// Body was not a JSON array of doctor records
    Decode(String),
    /// Local file could not be read
    Io { path: PathBuf, message: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, url } => write!(f, "HTTP {} from {}", status, url),
            Self::Decode(msg) => write!(f, "Invalid directory data: {}", msg),
            Self::Io { path, message } => write!(f, "Cannot read {}: {}", path.display(), message),
        }
    }
}

impl std::error::Error for SourceError {}

/// Lifecycle of the one directory load
#[derive(Debug, Default)]
pub enum SourceState {
    #[default]
    Loading,
    Loaded(Vec<DoctorRecord>),
    Failed(SourceError),
}

impl SourceState {
    pub fn from_result(result: Result<Vec<DoctorRecord>, SourceError>) -> Self {
        match result {
            Ok(doctors) => Self::Loaded(doctors),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded records; empty while loading or after a failure
    pub fn doctors(&self) -> &[DoctorRecord] {
        match self {
            Self::Loaded(doctors) => doctors,
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<&SourceError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Where the directory comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(String),
    File(PathBuf),
}

impl SourceLocation {
    pub fn parse(source: &str) -> Self {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(source.to_string())
        } else {
            Self::File(PathBuf::from(source.strip_prefix("file://").unwrap_or(source)))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch and decode the directory
pub async fn fetch_doctors(config: &Config) -> Result<Vec<DoctorRecord>, SourceError> {
    match SourceLocation::parse(&config.source_url) {
        SourceLocation::Remote(url) => {
            fetch_remote(&url, Duration::from_secs(config.request_timeout_secs)).await
        }
        SourceLocation::File(path) => read_file(path).await,
    }
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<DoctorRecord>, SourceError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("docfinder/{}", VERSION))
        .build()
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    // Read the body first so decode errors are reported as such, not as network errors
    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    decode(&body)
}

async fn read_file(path: PathBuf) -> Result<Vec<DoctorRecord>, SourceError> {
    let body = tokio::fs::read(&path).await.map_err(|e| SourceError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    decode(&body)
}

/// Decode a JSON array of doctor records
pub fn decode(body: &[u8]) -> Result<Vec<DoctorRecord>, SourceError> {
    serde_json::from_slice(body).map_err(|e| SourceError::Decode(e.to_string()))
}

/// Start the single background load
///
/// The receiver resolves once with `Loaded` or `Failed`.
pub fn spawn_fetch(config: Config) -> oneshot::Receiver<SourceState> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let location = SourceLocation::parse(&config.source_url);
        tracing::info!("Loading doctor directory from {}", location);

        let result = fetch_doctors(&config).await;
        match &result {
            Ok(doctors) => tracing::info!("Loaded {} doctors", doctors.len()),
            Err(e) => tracing::error!("Failed to load doctor directory: {}", e),
        }

        // Receiver gone means the UI already quit
        let _ = tx.send(SourceState::from_result(result));
    });

    rx
}
