//! Classification strategies for allocation grouping.

use crate::types::{Holding, Sector};
use serde::{Deserialize, Serialize};

/// Returns the holding's raw asset type tag.
#[must_use]
pub fn classify_by_type(holding: &Holding) -> String {
    holding.asset_type.clone()
}

/// Returns the sector label for the holding's asset type.
///
/// Total: unrecognised tags map to `"Other"`.
#[must_use]
pub fn classify_by_sector(holding: &Holding) -> String {
    Sector::from_type_tag(&holding.asset_type).name().to_string()
}

/// Two-valued classification toggle offered by the allocation widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationStrategy {
    /// Group by sector label.
    #[default]
    Sector,
    /// Group by raw asset type tag.
    Type,
}

impl ClassificationStrategy {
    /// Returns the classification key for a holding.
    #[must_use]
    pub fn classify(&self, holding: &Holding) -> String {
        match self {
            Self::Sector => classify_by_sector(holding),
            Self::Type => classify_by_type(holding),
        }
    }

    /// Returns the other strategy.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Sector => Self::Type,
            Self::Type => Self::Sector,
        }
    }

    /// Returns a human-readable name for the strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sector => "By Sector",
            Self::Type => "By Type",
        }
    }
}

impl std::fmt::Display for ClassificationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
