//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Search endpoint used when neither the config file nor the CLI names one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/search";

/// Log file written next to the working directory by default
pub const DEFAULT_LOG_FILE: &str = "seeker.log";

/// Default tracing level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directory under the platform config dir holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = "seeker";

/// Name of the config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Heading shown above the search bar
pub const APP_NAME: &str = "Seeker";

/// Number of past queries kept in memory
pub const MAX_HISTORY: usize = 50;
