//! Wire types for trade responses (REST).

use crate::shared::MarketSymbol;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// REST response for a single trade. Amounts arrive as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeResponse {
    pub id: String,
    pub is_buyer_maker: bool,
    pub price: String,
    pub quantity: String,
    pub quote_quantity: String,
    /// UTC, without an offset.
    pub timestamp: NaiveDateTime,
    pub market: MarketSymbol,
}

/// REST response for `GET /trades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradesResponse {
    pub trades: Vec<TradeResponse>,
    pub total: usize,
}
