//! Dashboard error types.

use std::path::PathBuf;

use ledgerview_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Dashboard error type.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Analytics rejected the holdings snapshot
    #[error("portfolio error: {0}")]
    Portfolio(#[from] PortfolioError),

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config content is not valid TOML for [`crate::DashboardConfig`]
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// View could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
