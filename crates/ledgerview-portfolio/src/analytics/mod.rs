//! Portfolio analytics.
//!
//! - [`performance`]: Top and worst performer ranking
//! - [`summary`]: Total value, cost and gain
//! - [`parallel`]: Config-driven parallel iteration helpers

pub mod parallel;
pub mod performance;
pub mod summary;

pub use parallel::{maybe_parallel_fold, maybe_parallel_map};
pub use performance::{top_performers, worst_performers, HoldingPerformance};
pub use summary::{summarize, summarize_with_config, PortfolioSummary};
