//! # Ledgerview Portfolio
//!
//! Allocation, risk and performance analytics behind the portfolio
//! dashboard widgets.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Exact money**: Values are `Decimal`; only weights and angles are `f64`
//! - **Deterministic order**: Identical input always yields identical output
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Allocation**: Grouping by sector or asset type with weights and palette colours
//! - **Pie Geometry**: Contiguous slice angles and SVG arc paths
//! - **Concentration Risk**: Low / Medium / High from the largest group
//! - **Performance**: Top and worst performers by gain versus average cost
//! - **Summary**: Total value, cost basis and unrealized gain
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgerview_portfolio::prelude::*;
//!
//! let holdings = vec![
//!     Holding::builder().symbol("AAPL").asset_type("stock")
//!         .current_price(dec!(100)).quantity(dec!(10)).build()?,
//!     Holding::builder().symbol("TSLA").asset_type("stock")
//!         .current_price(dec!(50)).quantity(dec!(4)).build()?,
//! ];
//!
//! let groups = aggregate(&holdings, classify_by_type)?;
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].total_value, dec!(1200));
//! assert_eq!(assess_risk(&groups), RiskAssessment::High);
//! # Ok::<(), PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`allocation`] - Classification, grouping, pie geometry, concentration risk
//! - [`analytics`] - Performance ranking, summary, parallel helpers
//! - [`types`] - Core types (Holding, Sector, RenderColor, Config)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel valuation for large holding sets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod allocation;
pub mod analytics;
pub mod error;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{AnalyticsConfig, Holding, HoldingBuilder, RenderColor, Sector, PALETTE};

pub use allocation::{
    aggregate, aggregate_by, aggregate_with_config, assess_risk, assess_risk_with,
    classify_by_sector, classify_by_type, compute_pie_slices, drawable_slices, largest_group,
    total_allocated, AllocationGroup, ClassificationStrategy, PieSlice, RiskAssessment,
    RiskThresholds,
};

pub use analytics::{
    maybe_parallel_fold, maybe_parallel_map, summarize, summarize_with_config, top_performers,
    worst_performers, HoldingPerformance, PortfolioSummary,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ledgerview_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::{AnalyticsConfig, Holding, HoldingBuilder, RenderColor, Sector};

    pub use crate::allocation::{
        aggregate, aggregate_by, aggregate_with_config, assess_risk, assess_risk_with,
        classify_by_sector, classify_by_type, compute_pie_slices, drawable_slices,
        AllocationGroup, ClassificationStrategy, PieSlice, RiskAssessment, RiskThresholds,
    };

    pub use crate::analytics::{
        summarize, top_performers, worst_performers, HoldingPerformance, PortfolioSummary,
    };

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let err = PortfolioError::missing_field("symbol");
        assert!(err.to_string().contains("symbol"));
    }
}
