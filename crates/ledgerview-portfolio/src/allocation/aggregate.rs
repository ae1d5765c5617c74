//! Allocation grouping.
//!
//! Groups holdings by a classification key and computes per-group totals,
//! weights and a deterministic rendering order.

use super::classify::ClassificationStrategy;
use crate::analytics::parallel::maybe_parallel_map;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AnalyticsConfig, Holding, RenderColor};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated allocation for one classification key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationGroup {
    /// Classification key shared by the grouped holdings.
    pub key: String,

    /// Total market value of the group.
    pub total_value: Decimal,

    /// Weight as percentage of total (0-100).
    pub percentage_of_total: f64,

    /// Number of holdings in this group (at least one).
    pub holding_count: usize,

    /// Palette colour for the group's rank.
    pub render_color: RenderColor,
}

/// Groups holdings by `classify` with the default [`AnalyticsConfig`].
///
/// See [`aggregate_with_config`].
///
/// # Errors
///
/// Returns [`crate::PortfolioError::InvalidInput`] if any holding has a
/// negative price or quantity.
pub fn aggregate<F>(holdings: &[Holding], classify: F) -> PortfolioResult<Vec<AllocationGroup>>
where
    F: Fn(&Holding) -> String + Sync + Send,
{
    aggregate_with_config(holdings, classify, &AnalyticsConfig::default())
}

/// Groups holdings with one of the built-in classification strategies.
///
/// # Errors
///
/// Same as [`aggregate`].
pub fn aggregate_by(
    holdings: &[Holding],
    strategy: ClassificationStrategy,
) -> PortfolioResult<Vec<AllocationGroup>> {
    aggregate(holdings, |h| strategy.classify(h))
}

/// Groups holdings by a classifier function.
///
/// Groups are returned by total value descending. Groups with equal value
/// keep the order in which their key was first encountered, so identical
/// input always yields identical output. When the total value is zero every
/// group gets a weight of zero.
///
/// # Arguments
///
/// * `holdings` - Slice of holdings to group
/// * `classify` - Function that extracts the group key from a holding
/// * `config` - Analytics configuration (controls parallel valuation)
///
/// # Errors
///
/// Returns [`crate::PortfolioError::InvalidInput`] if any holding has a
/// negative price or quantity, or if a value or the total overflows.
pub fn aggregate_with_config<F>(
    holdings: &[Holding],
    classify: F,
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<AllocationGroup>>
where
    F: Fn(&Holding) -> String + Sync + Send,
{
    if holdings.is_empty() {
        return Ok(Vec::new());
    }

    for h in holdings {
        h.validate()?;
    }

    let valued = maybe_parallel_map(holdings, config, |h| (classify(h), h.market_value()));
    let total_value = holdings
        .iter()
        .zip(&valued)
        .try_fold(Decimal::ZERO, |acc, (h, (_, mv))| {
            acc.checked_add(*mv)
                .ok_or_else(|| PortfolioError::invalid_input(&h.id, "total market value overflows"))
        })?;

    // (key, total value, count) in first-encounter order
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Decimal, usize)> = Vec::new();
    for (key, mv) in valued {
        if let Some(&i) = position.get(&key) {
            buckets[i].1 += mv;
            buckets[i].2 += 1;
        } else {
            position.insert(key.clone(), buckets.len());
            buckets.push((key, mv, 1));
        }
    }

    // Stable: ties keep first-encounter order
    buckets.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(buckets
        .into_iter()
        .enumerate()
        .map(|(rank, (key, value, count))| AllocationGroup {
            key,
            total_value: value,
            percentage_of_total: weight_pct(value, total_value),
            holding_count: count,
            render_color: RenderColor::for_rank(rank),
        })
        .collect())
}

/// Returns the total value of all groups.
#[must_use]
pub fn total_allocated(groups: &[AllocationGroup]) -> Decimal {
    groups
        .iter()
        .fold(Decimal::ZERO, |acc, g| acc.saturating_add(g.total_value))
}

/// Returns `value / total × 100`, or zero when the total is zero.
pub(crate) fn weight_pct(value: Decimal, total: Decimal) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (value / total * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}
