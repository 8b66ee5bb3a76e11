//! Configuration - defaults, optional YAML file, command line overrides

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ENDPOINT, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
};
use crate::error::ConfigError;

/// Command line arguments for the `seeker` binary
#[derive(Parser, Debug, Default)]
#[command(name = "seeker", version, about = "Search from your terminal")]
pub struct CliArgs {
    /// Search endpoint (POST, JSON body `{"query": ...}`)
    #[arg(short, long, value_name = "URL", env = "SEEKER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Give up on a search after this many seconds (default: wait forever)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file to load instead of the default location
    #[arg(short, long, value_name = "FILE", env = "SEEKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// On-disk shape of `config.yaml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

/// Resolved configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_secs: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Resolve defaults, then the config file, then CLI flags.
    ///
    /// An explicit `--config` that does not exist is an error; a missing
    /// default config file is not.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        match &args.config {
            Some(path) => config.merge_file(read_file_config(path)?),
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    config.merge_file(read_file_config(&path)?);
                }
            }
        }

        config.merge_args(args);
        config.validate()?;
        Ok(config)
    }

    fn merge_file(&mut self, file: FileConfig) {
        if let Some(endpoint) = file.endpoint {
            self.endpoint = endpoint;
        }
        if file.timeout_secs.is_some() {
            self.timeout_secs = file.timeout_secs;
        }
        if let Some(log_file) = file.log_file {
            self.log_file = log_file;
        }
        if let Some(level) = file.log_level {
            self.log_level = level;
        }
    }

    fn merge_args(&mut self, args: &CliArgs) {
        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }
        if args.timeout.is_some() {
            self.timeout_secs = args.timeout;
        }
        if let Some(log_file) = &args.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: String::from("must not be empty"),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                key: "timeout",
                reason: String::from("must be at least 1 second"),
            });
        }
        self.tracing_level()?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::Invalid {
                key: "log_level",
                reason: format!("unknown level '{}'", self.log_level),
            })
    }
}

/// `<platform config dir>/seeker/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
