/// Runtime configuration
///
/// Sources, lowest to highest priority:
/// - built-in defaults
/// - the TOML config file (`<config dir>/gc3-client/config.toml` or `--config`)
/// - command-line flags and `GC3_BACKEND_URL`

use clap::Parser;
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::state::guard::SettlePolicy;

/// Where the processing service listens when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// GC3 spectrogram client.
#[derive(Parser, Debug, Default)]
#[command(name = "gc3-client")]
#[command(about = "Upload IQ captures, render spectrograms, save and reload them")]
#[command(version)]
pub struct Args {
    /// Base URL of the spectrogram service
    #[arg(long, env = "GC3_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Capture to select on startup (.iq or .bin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Ignore responses that arrive after a newer request of the same kind
    #[arg(long)]
    pub discard_stale: bool,

    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Keys accepted in the config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    backend_url: Option<String>,
    discard_stale: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid backend URL {url:?}: {reason}")]
    BackendUrl { url: String, reason: String },
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: Url,
    pub settle_policy: SettlePolicy,
    pub initial_file: Option<PathBuf>,
}

impl Config {
    /// Merge the config file (if any) with the command line.
    ///
    /// A missing default file is fine; a missing `--config` file is an error.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => read_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => read_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        Self::resolve(args, file)
    }

    fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let raw_url = args
            .backend_url
            .clone()
            .or(file.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let backend_url = Url::parse(&raw_url).map_err(|e| ConfigError::BackendUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let settle_policy = if args.discard_stale || file.discard_stale.unwrap_or(false) {
            SettlePolicy::DiscardStale
        } else {
            SettlePolicy::LastWriteWins
        };

        Ok(Config {
            backend_url,
            settle_policy,
            initial_file: args.file.clone(),
        })
    }
}

/// Get the path where the config file is looked up by default
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("gc3-client");
    path.push("config.toml");
    Some(path)
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
