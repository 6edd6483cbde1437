//! Application context holding the stores.

use std::sync::Arc;

use super::api::{MarketApi, SessionApi};
use super::market::MarketStore;
use super::mount::MountHandle;
use super::session::SessionStore;
use super::Navigator;

/// Both stores, created once at the application root.
///
/// Cloning is cheap; clones share the same stores.
#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionStore>,
    markets: Arc<MarketStore>,
}

impl AppContext {
    pub fn new(
        session_api: Arc<dyn SessionApi>,
        market_api: Arc<dyn MarketApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session: Arc::new(SessionStore::new(session_api, navigator)),
            markets: Arc::new(MarketStore::new(market_api)),
        }
    }

    /// Both stores backed by one HTTP client, sharing its cookie jar.
    #[cfg(feature = "http")]
    pub fn with_client(client: crate::client::FexClient, navigator: Arc<dyn Navigator>) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client, navigator)
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn markets(&self) -> &Arc<MarketStore> {
        &self.markets
    }

    /// Mount both stores. Each starts its own bootstrap.
    pub fn mount(&self) -> AppMount {
        AppMount {
            session: self.session.mount(),
            markets: self.markets.mount(),
        }
    }
}

/// Mount handles for both stores. Dropping it unmounts both.
#[derive(Debug)]
pub struct AppMount {
    pub session: MountHandle,
    pub markets: MountHandle,
}

impl AppMount {
    pub async fn settled(self) {
        let Self { session, markets } = self;
        tokio::join!(session.settled(), markets.settled());
    }

    pub fn unmount(self) {
        drop(self);
    }
}
