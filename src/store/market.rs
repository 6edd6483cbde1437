//! Market store — the list of tradable markets.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::api::MarketApi;
use super::mount::{MountHandle, MountSlot};
use crate::domain::market::MarketDescriptor;
use crate::error::SdkError;

/// Holds the market list. `None` until the first successful fetch.
pub struct MarketStore {
    api: Arc<dyn MarketApi>,
    state: watch::Sender<Option<Vec<MarketDescriptor>>>,
    mounts: MountSlot,
}

impl MarketStore {
    pub fn new(api: Arc<dyn MarketApi>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            api,
            state,
            mounts: MountSlot::default(),
        }
    }

    pub fn markets(&self) -> Option<Vec<MarketDescriptor>> {
        self.state.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn find(&self, symbol: &str) -> Option<MarketDescriptor> {
        self.state
            .borrow()
            .as_ref()?
            .iter()
            .find(|m| m.symbol.as_str() == symbol)
            .cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Vec<MarketDescriptor>>> {
        self.state.subscribe()
    }

    /// Spawn the mount-time bootstrap. Failures are logged, not surfaced.
    pub fn mount(self: &Arc<Self>) -> MountHandle {
        let store = Arc::clone(self);
        MountHandle::spawn(&self.mounts, move |token| async move {
            let _ = store.bootstrap_until(&token).await;
        })
    }

    /// Fetch `/markets` and replace the list wholesale.
    ///
    /// On failure the previous list stays in place. Supersedes any
    /// mount-time bootstrap still in flight.
    pub async fn bootstrap(&self) -> Result<usize, SdkError> {
        let token = self.mounts.begin();
        self.bootstrap_until(&token).await
    }

    async fn bootstrap_until(&self, token: &CancellationToken) -> Result<usize, SdkError> {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(SdkError::Cancelled),
            result = self.api.list_markets() => result,
        };

        match result {
            Ok(markets) => {
                let count = markets.len();
                let applied = self.state.send_if_modified(|current| {
                    if token.is_cancelled() {
                        return false;
                    }
                    *current = Some(markets);
                    true
                });
                if !applied {
                    tracing::debug!("market bootstrap superseded, dropping result");
                    return Err(SdkError::Cancelled);
                }
                tracing::debug!(count, "markets loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load markets");
                Err(e)
            }
        }
    }
}
