//! # FEX SDK
//!
//! Rust client for the FEX exchange backend: session lifecycle, market
//! metadata, and recent trades.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors, network constants
//! 2. **Auth** — User profile and login/register/logout wire types
//! 3. **HTTP API** — `FexHttp` with a cookie jar and per-endpoint retry policies
//! 4. **High-Level Client** — `FexClient` with nested sub-clients
//! 5. **Stores** — `SessionStore` and `MarketStore`, mounted through an `AppContext`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fex_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! let client = FexClient::builder().from_env().build()?;
//! let (routes, mut nav) = tokio::sync::mpsc::unbounded_channel();
//!
//! let ctx = AppContext::with_client(client, Arc::new(routes));
//! let mount = ctx.mount();
//!
//! ctx.session().login("a@b.com", "hunter22").await?;
//! let usdc = ctx.session().balance("USDC");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: user profile, login/register/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FexClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Stores ──────────────────────────────────────────────────────────

/// Session and market stores with mount/unmount lifecycle.
pub mod store;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{MarketSymbol, Side};

    // Domain types
    pub use crate::domain::market::{MarketDescriptor, OrderCheckError};
    pub use crate::domain::trade::{Trade, TradeHistory};

    // Errors
    pub use crate::error::{ApiErrorKind, AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};

    // Auth + User types
    pub use crate::auth::{Asset, User};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AuthClient, FexClient, FexClientBuilder, MarketsClient, TradesClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Stores
    pub use crate::store::{
        AppContext, AppMount, MarketApi, MarketStore, MountHandle, Navigator, Route, Session,
        SessionApi, SessionStore,
    };
}
