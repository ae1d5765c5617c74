//! Dashboard configuration.

use std::path::Path;

use ledgerview_portfolio::{AnalyticsConfig, ClassificationStrategy, RiskThresholds};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{DashboardError, DashboardResult};

/// Dashboard configuration.
///
/// Every field has a default, so an empty file is a valid config.
///
/// ```toml
/// strategy = "type"
/// performer_count = 5
///
/// [risk]
/// high = 50.0
///
/// [chart]
/// radius = 120.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial allocation grouping
    #[serde(default)]
    pub strategy: ClassificationStrategy,

    /// Number of holdings in the top/worst performer lists
    #[serde(default = "default_performer_count")]
    pub performer_count: usize,

    /// Concentration risk thresholds
    #[serde(default)]
    pub risk: RiskThresholds,

    /// Analytics computation settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Pie chart geometry
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Pie chart geometry in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Centre x coordinate
    #[serde(default = "default_center")]
    pub center_x: f64,

    /// Centre y coordinate
    #[serde(default = "default_center")]
    pub center_y: f64,

    /// Radius
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_performer_count() -> usize {
    3
}

fn default_center() -> f64 {
    100.0
}

fn default_radius() -> f64 {
    90.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            radius: default_radius(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            strategy: ClassificationStrategy::default(),
            performer_count: default_performer_count(),
            risk: RiskThresholds::default(),
            analytics: AnalyticsConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded dashboard config from {} (strategy: {})",
            path.display(),
            config.strategy
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Set the allocation grouping.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ClassificationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the performer list length.
    #[must_use]
    pub fn with_performer_count(mut self, count: usize) -> Self {
        self.performer_count = count;
        self
    }
}
