//! Holding representation.

use crate::error::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single holding in a portfolio snapshot.
///
/// Represents a quantity of a tradable instrument priced at its current
/// market value. The caller owns the snapshot; analytics only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier for this position.
    pub id: String,

    /// Ticker symbol (e.g., "AAPL", "BTC").
    pub symbol: String,

    /// Display name of the instrument.
    #[serde(default)]
    pub name: Option<String>,

    /// Raw asset type tag ("stock", "crypto", "etf", "bond", ...).
    pub asset_type: String,

    /// Current market price per unit.
    pub current_price: Decimal,

    /// Units held.
    pub quantity: Decimal,

    /// Average acquisition cost per unit.
    pub average_cost: Decimal,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the market value (`current_price × quantity`).
    ///
    /// Saturates at the `Decimal` bounds; [`Holding::validate`] rejects
    /// holdings whose value is not representable.
    #[must_use]
    pub fn market_value(&self) -> Decimal {
        self.current_price.saturating_mul(self.quantity)
    }

    /// Returns the cost basis (`average_cost × quantity`), saturating.
    #[must_use]
    pub fn cost_basis(&self) -> Decimal {
        self.average_cost.saturating_mul(self.quantity)
    }

    /// Returns the market value, or `None` if it overflows.
    #[must_use]
    pub fn checked_market_value(&self) -> Option<Decimal> {
        self.current_price.checked_mul(self.quantity)
    }

    /// Returns the cost basis, or `None` if it overflows.
    #[must_use]
    pub fn checked_cost_basis(&self) -> Option<Decimal> {
        self.average_cost.checked_mul(self.quantity)
    }

    /// Returns the unrealized gain or loss in currency terms.
    #[must_use]
    pub fn gain_loss(&self) -> Decimal {
        self.market_value().saturating_sub(self.cost_basis())
    }

    /// Returns the per-unit price change versus average cost, in percent.
    ///
    /// A zero average cost (gifted or airdropped assets) yields zero. A
    /// change too large to represent saturates at `Decimal::MAX` (or
    /// `Decimal::MIN` for a loss).
    #[must_use]
    pub fn gain_loss_percent(&self) -> Decimal {
        if self.average_cost.is_zero() {
            return Decimal::ZERO;
        }
        self.current_price
            .checked_sub(self.average_cost)
            .and_then(|diff| diff.checked_div(self.average_cost))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                let gain = (self.current_price >= self.average_cost)
                    == self.average_cost.is_sign_positive();
                if gain {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                }
            })
    }

    /// Checks that price and quantity are non-negative and that market
    /// value and cost basis are representable.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.current_price < Decimal::ZERO {
            return Err(PortfolioError::invalid_input(
                &self.id,
                "current_price cannot be negative",
            ));
        }
        if self.quantity < Decimal::ZERO {
            return Err(PortfolioError::invalid_input(
                &self.id,
                "quantity cannot be negative",
            ));
        }
        if self.checked_market_value().is_none() {
            return Err(PortfolioError::invalid_input(
                &self.id,
                "market value overflows",
            ));
        }
        if self.checked_cost_basis().is_none() {
            return Err(PortfolioError::invalid_input(
                &self.id,
                "cost basis overflows",
            ));
        }
        Ok(())
    }
}

/// Builder for constructing a Holding.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    id: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    asset_type: Option<String>,
    current_price: Option<Decimal>,
    quantity: Option<Decimal>,
    average_cost: Option<Decimal>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holding ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the raw asset type tag.
    #[must_use]
    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Sets the current market price.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the quantity held.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the average cost per unit. Defaults to the current price.
    #[must_use]
    pub fn average_cost(mut self, cost: Decimal) -> Self {
        self.average_cost = Some(cost);
        self
    }

    /// Builds the holding.
    ///
    /// The ID defaults to the symbol and the asset type to `"other"`.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or any numeric
    /// field is negative.
    pub fn build(self) -> PortfolioResult<Holding> {
        let symbol = self
            .symbol
            .ok_or_else(|| PortfolioError::missing_field("symbol"))?;

        let current_price = self
            .current_price
            .ok_or_else(|| PortfolioError::missing_field("current_price"))?;

        let quantity = self
            .quantity
            .ok_or_else(|| PortfolioError::missing_field("quantity"))?;

        let id = self.id.unwrap_or_else(|| symbol.clone());
        let average_cost = self.average_cost.unwrap_or(current_price);

        if average_cost < Decimal::ZERO {
            return Err(PortfolioError::invalid_input(
                &id,
                "average_cost cannot be negative",
            ));
        }

        let holding = Holding {
            id,
            symbol,
            name: self.name,
            asset_type: self.asset_type.unwrap_or_else(|| "other".to_string()),
            current_price,
            quantity,
            average_cost,
        };
        holding.validate()?;

        Ok(holding)
    }
}
