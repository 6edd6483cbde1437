//! Session store — the signed-in user, their balances, and the logged-in flag.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::api::SessionApi;
use super::mount::{MountHandle, MountSlot};
use super::{Navigator, Route};
use crate::auth::User;
use crate::error::SdkError;

/// Snapshot of the session as seen by readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_logged_in: bool,
}

impl Session {
    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_logged_in: true,
        }
    }

    /// Balance of `symbol`, if signed in and holding it.
    pub fn balance(&self, symbol: &str) -> Option<Decimal> {
        self.user.as_ref().and_then(|u| u.balance(symbol))
    }
}

/// Holds the session and runs the session lifecycle against the backend.
///
/// Every write replaces the whole [`Session`], so readers never see a
/// half-updated value.
pub struct SessionStore {
    api: Arc<dyn SessionApi>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<Session>,
    mounts: MountSlot,
}

impl SessionStore {
    pub fn new(api: Arc<dyn SessionApi>, navigator: Arc<dyn Navigator>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            api,
            navigator,
            state,
            mounts: MountSlot::default(),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn balance(&self, symbol: &str) -> Option<Decimal> {
        self.state.borrow().balance(symbol)
    }

    /// Observe every session replacement.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Spawn the mount-time bootstrap. Drop the handle to unmount.
    pub fn mount(self: &Arc<Self>) -> MountHandle {
        let store = Arc::clone(self);
        MountHandle::spawn(&self.mounts, move |token| async move {
            // Failures are already reflected in state and navigation.
            let _ = store.bootstrap_until(&token).await;
        })
    }

    /// Fetch `/auth/me` and replace the session with the result.
    ///
    /// On any failure the session is cleared and the navigator is sent to
    /// [`Route::Login`] once. The error is still returned so callers can tell
    /// a network outage from a rejected session.
    ///
    /// Supersedes any mount-time bootstrap still in flight.
    pub async fn bootstrap(&self) -> Result<User, SdkError> {
        let token = self.mounts.begin();
        self.bootstrap_until(&token).await
    }

    async fn bootstrap_until(&self, token: &CancellationToken) -> Result<User, SdkError> {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(SdkError::Cancelled),
            result = self.api.me() => result,
        };

        match result {
            Ok(user) => {
                if !self.apply(token, Session::signed_in(user.clone())) {
                    return Err(SdkError::Cancelled);
                }
                tracing::info!(user_id = %user.id, "session restored");
                Ok(user)
            }
            Err(e) => {
                if !self.apply(token, Session::default()) {
                    return Err(SdkError::Cancelled);
                }
                tracing::info!(error = %e, "no active session");
                self.navigator.navigate(Route::Login);
                Err(e)
            }
        }
    }

    /// Replace the session unless `token` was cancelled. The check runs under
    /// the channel's write lock.
    fn apply(&self, token: &CancellationToken, next: Session) -> bool {
        let applied = self.state.send_if_modified(|session| {
            if token.is_cancelled() {
                return false;
            }
            *session = next;
            true
        });
        if !applied {
            tracing::debug!("session bootstrap superseded, dropping result");
        }
        applied
    }

    /// Log in, then re-bootstrap the session and head home.
    ///
    /// A rejected login changes nothing and emits no navigation. After an
    /// accepted login exactly one bootstrap runs, replacing any mount-time
    /// bootstrap still in flight, and [`Route::Home`] follows whatever its
    /// outcome. A bootstrap failure is still returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SdkError> {
        if let Err(e) = self.api.login(email, password).await {
            tracing::info!(error = %e, "login rejected");
            return Err(e);
        }
        let result = self.bootstrap().await;
        if !matches!(result, Err(SdkError::Cancelled)) {
            self.navigator.navigate(Route::Home);
        }
        result
    }

    /// Create an account. Leaves the session and navigation untouched.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, SdkError> {
        self.api.register(username, email, password).await
    }

    /// Log out locally no matter what the backend says.
    ///
    /// Any bootstrap still in flight is cancelled first so a late `/auth/me`
    /// reply cannot sign the user back in.
    pub async fn logout(&self) {
        self.mounts.cancel_current();
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "logout request failed, clearing session anyway");
        }
        self.state.send_replace(Session::default());
        self.navigator.navigate(Route::Login);
    }
}
