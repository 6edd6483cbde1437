//! Markets sub-client.

use crate::client::FexClient;
use crate::domain::market::MarketDescriptor;
use crate::error::SdkError;
use crate::http::RetryPolicy;

/// Sub-client for market metadata.
pub struct Markets<'a> {
    pub(crate) client: &'a FexClient,
}

impl<'a> Markets<'a> {
    /// Fetch every enabled market, in backend order. Single attempt.
    pub async fn list(&self) -> Result<Vec<MarketDescriptor>, SdkError> {
        let url = self.client.http.endpoint("/markets");
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }
}
