//! Client-side stores read by the presentation layer.
//!
//! - [`SessionStore`] — signed-in user, balances, logged-in flag
//! - [`MarketStore`] — tradable market descriptors
//! - [`AppContext`] — both stores plus the navigator, built once at the
//!   application root and passed down explicitly
//!
//! Each store bootstraps once per mount. A mount is a [`MountHandle`]; dropping
//! it cancels the bootstrap and aborts the request if it is still in flight.

pub mod api;
pub mod context;
pub mod market;
mod mount;
pub mod session;

pub use api::{MarketApi, SessionApi};
pub use context::{AppContext, AppMount};
pub use market::MarketStore;
pub use mount::MountHandle;
pub use session::{Session, SessionStore};

use std::fmt;
use tokio::sync::mpsc;

/// Where the session lifecycle wants the UI to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Receives navigation signals from the stores.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, route: Route);
}

/// Forwards routes to a channel; a closed receiver is ignored.
impl Navigator for mpsc::UnboundedSender<Route> {
    fn navigate(&self, route: Route) {
        if self.send(route).is_err() {
            tracing::debug!(%route, "navigation receiver dropped");
        }
    }
}
