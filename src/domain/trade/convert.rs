//! Conversions from wire types to domain types for trades.

use super::wire::TradeResponse;
use super::Trade;
use crate::error::SdkError;
use crate::shared::Side;
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<TradeResponse> for Trade {
    type Error = SdkError;

    fn try_from(t: TradeResponse) -> Result<Self, Self::Error> {
        let side = if t.is_buyer_maker { Side::Sell } else { Side::Buy };
        Ok(Self {
            price: parse_amount(&t.id, "price", &t.price)?,
            quantity: parse_amount(&t.id, "quantity", &t.quantity)?,
            quote_quantity: parse_amount(&t.id, "quote_quantity", &t.quote_quantity)?,
            timestamp: t.timestamp.and_utc(),
            id: t.id,
            market: t.market,
            side,
        })
    }
}

fn parse_amount(id: &str, field: &str, raw: &str) -> Result<Decimal, SdkError> {
    Decimal::from_str(raw)
        .map_err(|e| SdkError::Validation(format!("trade {id}: invalid {field} {raw:?}: {e}")))
}
