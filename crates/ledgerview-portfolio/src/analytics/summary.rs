//! Portfolio value summary.

use crate::analytics::parallel::maybe_parallel_fold;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AnalyticsConfig, Holding};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline totals for the portfolio performance widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Total market value.
    pub total_value: Decimal,

    /// Total cost basis.
    pub total_cost: Decimal,

    /// Total unrealized gain or loss.
    pub total_gain_loss: Decimal,

    /// Gain or loss relative to cost, in percent (zero when cost is zero).
    pub total_gain_loss_percent: f64,

    /// Number of holdings.
    pub holding_count: usize,
}

/// Summarizes holdings with the default [`AnalyticsConfig`].
///
/// # Errors
///
/// Returns [`crate::PortfolioError::InvalidInput`] if any holding has a
/// negative price or quantity.
pub fn summarize(holdings: &[Holding]) -> PortfolioResult<PortfolioSummary> {
    summarize_with_config(holdings, &AnalyticsConfig::default())
}

/// Summarizes holdings.
///
/// # Errors
///
/// Returns [`crate::PortfolioError::InvalidInput`] if any holding has a
/// negative price or quantity, or if a value or total overflows.
pub fn summarize_with_config(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<PortfolioSummary> {
    for h in holdings {
        h.validate()?;
    }

    let (total_value, total_cost) = maybe_parallel_fold(
        holdings,
        config,
        Some((Decimal::ZERO, Decimal::ZERO)),
        |acc, h| {
            let (mv, cost) = acc?;
            Some((mv.checked_add(h.market_value())?, cost.checked_add(h.cost_basis())?))
        },
        |a, b| {
            let ((mv_a, cost_a), (mv_b, cost_b)) = (a?, b?);
            Some((mv_a.checked_add(mv_b)?, cost_a.checked_add(cost_b)?))
        },
    )
    .ok_or_else(|| PortfolioError::invalid_input("portfolio", "total value overflows"))?;

    // Both totals are non-negative, so the difference cannot overflow
    let total_gain_loss = total_value - total_cost;
    let total_gain_loss_percent = if total_cost.is_zero() {
        0.0
    } else {
        total_gain_loss
            .checked_div(total_cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
            .to_f64()
            .unwrap_or(0.0)
    };

    Ok(PortfolioSummary {
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percent,
        holding_count: holdings.len(),
    })
}
