//! Trades sub-client — recent trade queries.

use crate::client::FexClient;
use crate::domain::trade::wire::TradesResponse;
use crate::domain::trade::{Trade, MAX_TRADES_LIMIT};
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Trades<'a> {
    pub(crate) client: &'a FexClient,
}

impl<'a> Trades<'a> {
    /// Most recent trades, newest first.
    ///
    /// `market = None` returns trades across all markets. `limit` is capped
    /// at [`MAX_TRADES_LIMIT`]; the backend defaults to 100 when omitted.
    pub async fn recent(
        &self,
        market: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>, SdkError> {
        let mut params = Vec::new();
        if let Some(m) = market {
            params.push(format!("market={}", urlencoding::encode(m)));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l.min(MAX_TRADES_LIMIT)));
        }

        let mut url = self.client.http.endpoint("/trades");
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }

        let resp: TradesResponse = self
            .client
            .http
            .get(&url, RetryPolicy::Idempotent)
            .await?;

        resp.trades.into_iter().map(Trade::try_from).collect()
    }
}
