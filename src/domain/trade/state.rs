//! Trade state containers — app-owned, SDK-provided update logic.

use super::Trade;
use crate::shared::MarketSymbol;
use std::collections::VecDeque;

/// Rolling trade history for one market, newest first.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone)]
pub struct TradeHistory {
    pub market: MarketSymbol,
    trades: VecDeque<Trade>,
    max_size: usize,
}

impl TradeHistory {
    pub fn new(market: MarketSymbol, max_size: usize) -> Self {
        Self {
            market,
            trades: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push a new trade, evicting the oldest if at capacity.
    ///
    /// Trades for other markets are ignored.
    pub fn push(&mut self, trade: Trade) {
        if trade.market != self.market || self.max_size == 0 {
            return;
        }
        if self.trades.len() >= self.max_size {
            self.trades.pop_back();
        }
        self.trades.push_front(trade);
    }

    /// Replace all trades with a REST result (already newest first).
    pub fn replace(&mut self, trades: Vec<Trade>) {
        self.trades = trades
            .into_iter()
            .filter(|t| t.market == self.market)
            .take(self.max_size)
            .collect();
    }

    pub fn trades(&self) -> &VecDeque<Trade> {
        &self.trades
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
