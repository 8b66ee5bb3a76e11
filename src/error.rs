//! Error types shared by the network and app layers

use thiserror::Error;

/// Every way a single search can fail.
///
/// All variants are handled the same way by the app layer: the failure is
/// logged once and the result list degrades to empty. The variant is kept
/// around so the status line can tell "no matches" apart from "broken".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// DNS, connect, or the body could not be read
    #[error("transport failure: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// Body was not valid JSON
    #[error("invalid JSON in response: {0}")]
    Decode(String),

    /// Valid JSON, but `results` is not a list of strings
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl SearchError {
    /// Short label for the status line
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "network",
            SearchError::Status(_) => "http",
            SearchError::Decode(_) => "decode",
            SearchError::Shape(_) => "shape",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        let msg = if e.is_timeout() {
            format!("request timed out: {}", e)
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            format!("request failed: {}", e)
        };
        SearchError::Transport(msg)
    }
}

/// Problems loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
