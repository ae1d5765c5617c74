//! Watchlist state updates.
//!
//! Entries are never mutated in place: every update returns a new list
//! with the matching entry replaced by key (symbol).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One row of the watchlist widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Ticker symbol, the entry key
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Last price
    pub price: Decimal,
    /// Daily change in percent
    pub change_percent: Decimal,
    /// Whether the user is watching this symbol
    #[serde(default)]
    pub watched: bool,
}

impl WatchlistEntry {
    /// Create an unwatched entry.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        change_percent: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change_percent,
            watched: false,
        }
    }

    /// Returns a copy with the watched flag set.
    #[must_use]
    pub fn with_watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }

    /// Returns true if the price rose today.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change_percent > Decimal::ZERO
    }
}

/// Flip the watched flag of `symbol`.
///
/// Unknown symbols return an unchanged copy.
#[must_use]
pub fn toggle_watched(entries: &[WatchlistEntry], symbol: &str) -> Vec<WatchlistEntry> {
    replace_by_symbol(entries, symbol, |e| {
        let watched = !e.watched;
        e.clone().with_watched(watched)
    })
}

/// Set the watched flag of `symbol`.
///
/// Unknown symbols return an unchanged copy.
#[must_use]
pub fn set_watched(entries: &[WatchlistEntry], symbol: &str, watched: bool) -> Vec<WatchlistEntry> {
    replace_by_symbol(entries, symbol, |e| e.clone().with_watched(watched))
}

/// Entries the user is watching, in list order.
pub fn watched_entries(entries: &[WatchlistEntry]) -> impl Iterator<Item = &WatchlistEntry> {
    entries.iter().filter(|e| e.watched)
}

fn replace_by_symbol<F>(entries: &[WatchlistEntry], symbol: &str, update: F) -> Vec<WatchlistEntry>
where
    F: Fn(&WatchlistEntry) -> WatchlistEntry,
{
    if !entries.iter().any(|e| e.symbol == symbol) {
        warn!("Watchlist has no entry for {}", symbol);
        return entries.to_vec();
    }

    debug!("Updating watchlist entry {}", symbol);
    entries
        .iter()
        .map(|e| if e.symbol == symbol { update(e) } else { e.clone() })
        .collect()
}
