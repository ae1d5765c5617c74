//! # Ledgerview Dashboard
//!
//! Presentation-facing facade over `ledgerview-portfolio`.
//!
//! ## Features
//!
//! - Allocation view snapshots (groups, pie slices, risk, performers, totals)
//! - Sector / type grouping toggle
//! - SVG arc paths for the allocation pie
//! - Watchlist value updates
//! - Configuration via TOML file
//! - JSON export of views
//!
//! ## Usage
//!
//! ```ignore
//! use ledgerview_dashboard::{AllocationView, DashboardConfig};
//!
//! let config = DashboardConfig::from_file("config/ledgerview.toml")?;
//! let view = AllocationView::build(&holdings, &config)?;
//! let json = view.to_json()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod view;
pub mod watchlist;

pub use config::{ChartConfig, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
pub use view::{AllocationView, SliceArc};
pub use watchlist::{set_watched, toggle_watched, watched_entries, WatchlistEntry};
