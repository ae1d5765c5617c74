//! Concentration risk assessment.
//!
//! The label depends only on the share of the single largest group.

use super::aggregate::AllocationGroup;
use serde::{Deserialize, Serialize};

/// Coarse concentration risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskAssessment {
    /// No group dominates.
    #[default]
    Low,
    /// One group holds a large share.
    Medium,
    /// One group dominates the portfolio.
    High,
}

impl RiskAssessment {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Percentage thresholds for [`assess_risk_with`].
///
/// A largest-group share strictly above `high` is `High`, strictly above
/// `medium` is `Medium`, anything else `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Share (0-100) above which risk is `High`.
    pub high: f64,
    /// Share (0-100) above which risk is `Medium`.
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 40.0,
            medium: 25.0,
        }
    }
}

impl RiskThresholds {
    /// Classifies a single concentration share.
    #[must_use]
    pub fn classify(&self, max_share_pct: f64) -> RiskAssessment {
        if max_share_pct > self.high {
            RiskAssessment::High
        } else if max_share_pct > self.medium {
            RiskAssessment::Medium
        } else {
            RiskAssessment::Low
        }
    }
}

/// Assesses concentration risk with the default thresholds (40% / 25%).
///
/// An empty group list is `Low`.
#[must_use]
pub fn assess_risk(groups: &[AllocationGroup]) -> RiskAssessment {
    assess_risk_with(groups, &RiskThresholds::default())
}

/// Assesses concentration risk with custom thresholds.
#[must_use]
pub fn assess_risk_with(groups: &[AllocationGroup], thresholds: &RiskThresholds) -> RiskAssessment {
    largest_group(groups)
        .map(|g| thresholds.classify(g.percentage_of_total))
        .unwrap_or_default()
}

/// Returns the group with the largest share, the first one on ties.
#[must_use]
pub fn largest_group(groups: &[AllocationGroup]) -> Option<&AllocationGroup> {
    groups.iter().reduce(|best, g| {
        if g.percentage_of_total > best.percentage_of_total {
            g
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RenderColor;
    use rust_decimal::Decimal;

    fn group(key: &str, pct: f64) -> AllocationGroup {
        AllocationGroup {
            key: key.to_string(),
            total_value: Decimal::ONE,
            percentage_of_total: pct,
            holding_count: 1,
            render_color: RenderColor::Blue,
        }
    }

    #[test]
    fn test_empty_is_low() {
        assert_eq!(assess_risk(&[]), RiskAssessment::Low);
        assert!(largest_group(&[]).is_none());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(assess_risk(&[group("A", 40.0)]), RiskAssessment::Medium);
        assert_eq!(assess_risk(&[group("A", 40.0001)]), RiskAssessment::High);
        assert_eq!(assess_risk(&[group("A", 25.0)]), RiskAssessment::Low);
        assert_eq!(assess_risk(&[group("A", 25.5)]), RiskAssessment::Medium);
    }

    #[test]
    fn test_uses_largest_group_anywhere() {
        let groups = vec![group("A", 20.0), group("B", 55.0), group("C", 25.0)];
        assert_eq!(assess_risk(&groups), RiskAssessment::High);
        assert_eq!(largest_group(&groups).unwrap().key, "B");
    }

    #[test]
    fn test_largest_group_tie_keeps_first() {
        let groups = vec![group("A", 50.0), group("B", 50.0)];
        assert_eq!(largest_group(&groups).unwrap().key, "A");
        assert_eq!(assess_risk(&groups), RiskAssessment::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = RiskThresholds {
            high: 20.0,
            medium: 10.0,
        };
        let groups = vec![group("A", 22.0), group("B", 78.0 / 6.0)];
        assert_eq!(assess_risk_with(&groups, &strict), RiskAssessment::High);
        assert_eq!(assess_risk(&groups), RiskAssessment::Low);
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(RiskAssessment::High > RiskAssessment::Medium);
        assert!(RiskAssessment::Medium > RiskAssessment::Low);
        assert_eq!(RiskAssessment::Medium.to_string(), "Medium");
    }
}
