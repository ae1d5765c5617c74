//! Domain types for portfolio analytics.
//!
//! - [`Holding`]: A single position priced at current market value
//! - [`Sector`]: Coarse sector label derived from the asset type tag
//! - [`RenderColor`]: Palette colour assigned by group rank
//! - [`AnalyticsConfig`]: Configuration for analytics computation

mod config;
mod holding;
mod palette;
mod sector;

pub use config::AnalyticsConfig;
pub use holding::{Holding, HoldingBuilder};
pub use palette::{RenderColor, PALETTE};
pub use sector::Sector;
