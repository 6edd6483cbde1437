//! Trade domain — executed trades and the rolling history behind the trade table.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{MarketSymbol, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::TradeHistory;

/// Backend cap on the number of trades returned by one query.
pub const MAX_TRADES_LIMIT: u32 = 1000;

/// A trade execution record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: String,
    pub market: MarketSymbol,
    pub price: Decimal,
    pub quantity: Decimal,
    pub quote_quantity: Decimal,
    /// Taker side.
    pub side: Side,
    pub timestamp: DateTime<Utc>,
}
