//! Market domain — tradable market descriptors and order checks.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{fractional_digits, MarketSymbol};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── MarketDescriptor ────────────────────────────────────────────────────────

/// Static trading parameters of one market, as served by `GET /markets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDescriptor {
    pub symbol: MarketSymbol,
    pub base: String,
    pub quote: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
    pub min_order_size: Decimal,
    pub max_order_size: Decimal,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

impl MarketDescriptor {
    /// Check a prospective limit order against this market's limits.
    ///
    /// Reports the first violation in a fixed order: price sign, price
    /// bounds, quantity sign, size bounds, then precision.
    pub fn check_order(&self, price: Decimal, quantity: Decimal) -> Result<(), OrderCheckError> {
        if price <= Decimal::ZERO {
            return Err(OrderCheckError::NonPositivePrice);
        }
        if price < self.min_price {
            return Err(OrderCheckError::PriceBelowMin(self.min_price));
        }
        if price > self.max_price {
            return Err(OrderCheckError::PriceAboveMax(self.max_price));
        }
        if quantity <= Decimal::ZERO {
            return Err(OrderCheckError::NonPositiveQuantity);
        }
        if quantity < self.min_order_size {
            return Err(OrderCheckError::QuantityBelowMin(self.min_order_size));
        }
        if quantity > self.max_order_size {
            return Err(OrderCheckError::QuantityAboveMax(self.max_order_size));
        }
        if fractional_digits(price) > self.price_precision {
            return Err(OrderCheckError::PricePrecision(self.price_precision));
        }
        if fractional_digits(quantity) > self.quantity_precision {
            return Err(OrderCheckError::QuantityPrecision(self.quantity_precision));
        }
        Ok(())
    }

    /// Truncate a price to the market's price precision.
    pub fn round_price(&self, price: Decimal) -> Decimal {
        price.round_dp_with_strategy(self.price_precision, RoundingStrategy::ToZero)
    }

    /// Truncate a quantity to the market's quantity precision.
    pub fn round_quantity(&self, quantity: Decimal) -> Decimal {
        quantity.round_dp_with_strategy(self.quantity_precision, RoundingStrategy::ToZero)
    }
}

// ─── Order checks ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCheckError {
    NonPositivePrice,
    PriceBelowMin(Decimal),
    PriceAboveMax(Decimal),
    NonPositiveQuantity,
    QuantityBelowMin(Decimal),
    QuantityAboveMax(Decimal),
    PricePrecision(u32),
    QuantityPrecision(u32),
}

impl fmt::Display for OrderCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderCheckError::NonPositivePrice => write!(f, "Price must be greater than 0"),
            OrderCheckError::PriceBelowMin(min) => write!(f, "Price must be at least {min}"),
            OrderCheckError::PriceAboveMax(max) => write!(f, "Price must be at most {max}"),
            OrderCheckError::NonPositiveQuantity => write!(f, "Quantity must be greater than 0"),
            OrderCheckError::QuantityBelowMin(min) => write!(f, "Minimum order size is {min}"),
            OrderCheckError::QuantityAboveMax(max) => write!(f, "Maximum order size is {max}"),
            OrderCheckError::PricePrecision(dp) => {
                write!(f, "Price precision must be {dp} decimal places")
            }
            OrderCheckError::QuantityPrecision(dp) => {
                write!(f, "Quantity precision must be {dp} decimal places")
            }
        }
    }
}

impl std::error::Error for OrderCheckError {}
