//! Mount lifecycle shared by the stores.

use std::future::Future;
use std::sync::Mutex;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Tracks the token of a store's current mount.
///
/// Starting a new mount cancels the previous one, so a quick
/// unmount/remount never leaves two bootstraps racing for the same store.
#[derive(Debug, Default)]
pub(crate) struct MountSlot {
    current: Mutex<Option<CancellationToken>>,
}

impl MountSlot {
    pub(crate) fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = current.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Cancel the current mount's bootstrap, if any. The mount handle stays
    /// valid but its result will never be applied.
    pub(crate) fn cancel_current(&self) {
        let current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = current.as_ref() {
            token.cancel();
        }
    }
}

/// Owner of one mounted bootstrap task.
///
/// Dropping the handle unmounts: the token is cancelled, the in-flight request
/// future is dropped (aborting the HTTP call) and its result is never applied.
#[derive(Debug)]
pub struct MountHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl MountHandle {
    pub(crate) fn spawn<F, Fut>(slot: &MountSlot, bootstrap: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = slot.begin();
        let task = tokio::spawn(bootstrap(token.clone()));
        Self {
            token,
            task: Some(task),
        }
    }

    /// Cancel the bootstrap without giving up the handle.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the bootstrap task to finish (completed or cancelled).
    pub async fn settled(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "store bootstrap task failed");
            }
        }
    }

    /// Tear the mount down.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
