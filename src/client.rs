//! High-level client — `FexClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs` (auth lives
//! in `auth/client.rs`). This module keeps the builder and accessor methods.

use crate::auth::client::Auth;
use crate::domain::market::client::Markets;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::FexHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for talking to the FEX backend.
///
/// Cloning is cheap and shares the connection pool and cookie jar, so a
/// login through one clone authenticates every other clone.
#[derive(Clone)]
pub struct FexClient {
    pub(crate) http: FexHttp,
}

impl FexClient {
    pub fn builder() -> FexClientBuilder {
        FexClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FexClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for FexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FexClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Take the base URL from `FEX_API_URL`, keeping the current one if unset or blank.
    pub fn from_env(mut self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.base_url = url.trim().to_string(),
            _ => tracing::debug!("{API_URL_ENV} not set, using {}", self.base_url),
        }
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<FexClient, SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Validation(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        Ok(FexClient {
            http: FexHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
