//! Allocation view assembly.
//!
//! Builds one immutable snapshot of everything the allocation and
//! performance widgets render from a holdings snapshot.

use ledgerview_portfolio::{
    aggregate_with_config, assess_risk_with, compute_pie_slices, drawable_slices, largest_group,
    summarize_with_config, top_performers, worst_performers, AllocationGroup,
    ClassificationStrategy, Holding, HoldingPerformance, PieSlice, PortfolioSummary,
    RiskAssessment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ChartConfig, DashboardConfig};
use crate::error::DashboardResult;

/// Everything the allocation widgets render for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationView {
    /// Grouping used for `groups` and `slices`
    pub strategy: ClassificationStrategy,
    /// Portfolio totals
    pub summary: PortfolioSummary,
    /// Groups by value descending
    pub groups: Vec<AllocationGroup>,
    /// Pie slices matching `groups`
    pub slices: Vec<PieSlice>,
    /// Concentration risk label
    pub risk: RiskAssessment,
    /// Best performing holdings
    pub top_performers: Vec<HoldingPerformance>,
    /// Worst performing holdings
    pub worst_performers: Vec<HoldingPerformance>,
}

/// A drawable slice ready for an SVG `<path>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceArc {
    /// Group key
    pub key: String,
    /// Fill colour as hex
    pub fill: String,
    /// Path data
    pub path: String,
}

impl AllocationView {
    /// Build a view with the configured strategy.
    pub fn build(holdings: &[Holding], config: &DashboardConfig) -> DashboardResult<Self> {
        Self::build_with_strategy(holdings, config, config.strategy)
    }

    /// Build a view with an explicit strategy.
    pub fn build_with_strategy(
        holdings: &[Holding],
        config: &DashboardConfig,
        strategy: ClassificationStrategy,
    ) -> DashboardResult<Self> {
        let groups =
            aggregate_with_config(holdings, |h| strategy.classify(h), &config.analytics)?;
        let summary = summarize_with_config(holdings, &config.analytics)?;
        let slices = compute_pie_slices(&groups);
        let risk = assess_risk_with(&groups, &config.risk);

        debug!(
            "Built allocation view: {} holdings, {} groups ({}), risk {}",
            holdings.len(),
            groups.len(),
            strategy,
            risk
        );

        if risk == RiskAssessment::High {
            if let Some(largest) = largest_group(&groups) {
                warn!(
                    "High concentration: {} holds {:.1}% of portfolio value",
                    largest.key, largest.percentage_of_total
                );
            }
        }

        Ok(Self {
            strategy,
            summary,
            groups,
            slices,
            risk,
            top_performers: top_performers(holdings, config.performer_count),
            worst_performers: worst_performers(holdings, config.performer_count),
        })
    }

    /// Rebuild the view for the other grouping, as the widget toggle does.
    pub fn toggled(&self, holdings: &[Holding], config: &DashboardConfig) -> DashboardResult<Self> {
        Self::build_with_strategy(holdings, config, self.strategy.toggled())
    }

    /// SVG arcs for every drawable slice.
    #[must_use]
    pub fn arc_paths(&self, chart: &ChartConfig) -> Vec<SliceArc> {
        drawable_slices(&self.slices)
            .filter_map(|s| {
                s.svg_arc_path(chart.center_x, chart.center_y, chart.radius)
                    .map(|path| SliceArc {
                        key: s.group_key.clone(),
                        fill: s.render_color.hex().to_string(),
                        path,
                    })
            })
            .collect()
    }

    /// Looks up a group by key.
    #[must_use]
    pub fn group(&self, key: &str) -> Option<&AllocationGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Returns true if the snapshot held no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.holding_count == 0
    }

    /// Serialize the view as JSON for the presentation layer.
    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the view as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
