//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_listeners must be greater than zero")]
    InvalidMaxListeners,
}
