//! Holding performance ranking.
//!
//! Ranks holdings by the percentage change of current price versus
//! average cost for the top/worst performer widgets.

use crate::types::Holding;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding together with its gain metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingPerformance {
    /// The holding.
    pub holding: Holding,

    /// Market value (`current_price × quantity`).
    pub market_value: Decimal,

    /// Cost basis (`average_cost × quantity`).
    pub cost_basis: Decimal,

    /// Unrealized gain or loss.
    pub gain_loss: Decimal,

    /// Price change versus average cost, in percent.
    pub gain_loss_percent: f64,
}

impl HoldingPerformance {
    /// Computes gain metrics for a holding.
    #[must_use]
    pub fn from_holding(holding: &Holding) -> Self {
        Self {
            holding: holding.clone(),
            market_value: holding.market_value(),
            cost_basis: holding.cost_basis(),
            gain_loss: holding.gain_loss(),
            gain_loss_percent: holding.gain_loss_percent().to_f64().unwrap_or(0.0),
        }
    }

    /// Returns true if the holding trades above its average cost.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.gain_loss_percent > 0.0
    }
}

/// Returns up to `n` holdings with the highest percentage gain.
///
/// Holdings with equal gain keep their input order. If fewer than `n`
/// holdings exist, all are returned.
#[must_use]
pub fn top_performers(holdings: &[Holding], n: usize) -> Vec<HoldingPerformance> {
    ranked(holdings, n, true)
}

/// Returns up to `n` holdings with the lowest percentage gain.
///
/// Holdings with equal gain keep their input order. If fewer than `n`
/// holdings exist, all are returned.
#[must_use]
pub fn worst_performers(holdings: &[Holding], n: usize) -> Vec<HoldingPerformance> {
    ranked(holdings, n, false)
}

fn ranked(holdings: &[Holding], n: usize, descending: bool) -> Vec<HoldingPerformance> {
    // Rank on the exact Decimal change, not the f64 view of it
    let mut keyed: Vec<(Decimal, &Holding)> = holdings
        .iter()
        .map(|h| (h.gain_loss_percent(), h))
        .collect();

    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }

    keyed
        .into_iter()
        .take(n)
        .map(|(_, h)| HoldingPerformance::from_holding(h))
        .collect()
}
