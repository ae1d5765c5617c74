//! Portfolio allocation analysis.
//!
//! - **Classification**: sector or asset type keys for each holding
//! - **Aggregation**: per-key totals, weights, ranking and palette colours
//! - **Pie geometry**: contiguous slice angles and SVG arc paths
//! - **Risk**: concentration label from the largest group
//!
//! All functions are pure - they take holdings and return fresh values.
//!
//! # Example
//!
//! ```rust
//! use ledgerview_portfolio::allocation::*;
//! use ledgerview_portfolio::types::Holding;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::builder().symbol("AAPL").asset_type("stock")
//!         .current_price(dec!(100)).quantity(dec!(10)).build()?,
//!     Holding::builder().symbol("BND").asset_type("bond")
//!         .current_price(dec!(50)).quantity(dec!(20)).build()?,
//! ];
//!
//! let groups = aggregate(&holdings, classify_by_sector)?;
//! let slices = compute_pie_slices(&groups);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(slices[1].end_angle_degrees, 360.0);
//! assert_eq!(assess_risk(&groups), RiskAssessment::High);
//! # Ok::<(), ledgerview_portfolio::PortfolioError>(())
//! ```

mod aggregate;
mod classify;
mod pie;
mod risk;

pub use aggregate::*;
pub use classify::*;
pub use pie::*;
pub use risk::*;
