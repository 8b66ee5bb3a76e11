//! # Seeker
//!
//! A minimal terminal search front-end: type a query, it is POSTed as JSON
//! to a search endpoint, and the returned links are listed.
//!
//! ## Features
//! - Editable search bar with query history
//! - Result list, open any link in the system browser
//! - Stale responses from overlapping searches are dropped
//! - Failures degrade to an empty list and are logged, never fatal
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, SearchBar, SearchStatus};
pub use config::{CliArgs, Config};
pub use error::{ConfigError, SearchError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{parse_results, HttpReply, Query, SearchRequest};
pub use network::{HttpTransport, NetworkActor, SearchClient, SearchTransport};
