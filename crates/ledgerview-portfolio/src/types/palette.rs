//! Fixed render palette for allocation groups.

use serde::{Deserialize, Serialize};

/// Colour assigned to an allocation group for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderColor {
    /// Blue
    Blue,
    /// Green
    Green,
    /// Purple
    Purple,
    /// Orange
    Orange,
    /// Red
    Red,
    /// Yellow
    Yellow,
    /// Teal
    Teal,
    /// Pink
    Pink,
}

/// Palette in rank order.
pub const PALETTE: [RenderColor; 8] = [
    RenderColor::Blue,
    RenderColor::Green,
    RenderColor::Purple,
    RenderColor::Orange,
    RenderColor::Red,
    RenderColor::Yellow,
    RenderColor::Teal,
    RenderColor::Pink,
];

impl RenderColor {
    /// Returns the colour for a zero-based group rank, wrapping around the palette.
    #[must_use]
    pub fn for_rank(rank: usize) -> Self {
        PALETTE[rank % PALETTE.len()]
    }

    /// Returns the hex code of the colour.
    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#3B82F6",
            Self::Green => "#10B981",
            Self::Purple => "#8B5CF6",
            Self::Orange => "#F97316",
            Self::Red => "#EF4444",
            Self::Yellow => "#EAB308",
            Self::Teal => "#14B8A6",
            Self::Pink => "#EC4899",
        }
    }

    /// Returns a lowercase name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Teal => "teal",
            Self::Pink => "pink",
        }
    }
}

impl std::fmt::Display for RenderColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
