use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a scoring configuration.
///
/// Raised only while building a scorer; scoring itself fails with
/// [`mindwell_instruments::scoring::ValidationError`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid config: {0}")]
    Invalid(String),
}
