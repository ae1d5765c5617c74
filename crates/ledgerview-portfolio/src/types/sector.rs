//! Sector classification derived from asset type tags.
//!
//! Holdings carry no true sector taxonomy; the sector of a holding is the
//! coarse label for its asset type.

use serde::{Deserialize, Serialize};

/// Sector label for a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sector {
    /// Listed shares (`stock`)
    Equity,
    /// Digital assets (`crypto`)
    Cryptocurrency,
    /// Exchange traded funds (`etf`)
    ExchangeTradedFund,
    /// Bonds (`bond`)
    FixedIncome,
    /// Any unrecognised type tag
    #[default]
    Other,
}

impl Sector {
    /// Returns all sectors in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Equity,
            Self::Cryptocurrency,
            Self::ExchangeTradedFund,
            Self::FixedIncome,
            Self::Other,
        ]
    }

    /// Maps a raw asset type tag to its sector.
    ///
    /// Matching is exact; unknown tags map to [`Sector::Other`].
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "stock" => Self::Equity,
            "crypto" => Self::Cryptocurrency,
            "etf" => Self::ExchangeTradedFund,
            "bond" => Self::FixedIncome,
            _ => Self::Other,
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::ExchangeTradedFund => "Exchange Traded Fund",
            Self::FixedIncome => "Fixed Income",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
