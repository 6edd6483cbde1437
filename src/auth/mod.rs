//! Authentication — user profile types, login/register/logout wire types.
//!
//! ## Security Model
//!
//! The backend issues an HTTP-only `cex_token` cookie on login and register.
//! The SDK never reads, stores, or exposes it: the HTTP client's cookie jar
//! replays it on every request, and `POST /auth/logout` clears it server-side.
//!
//! ## Replies
//!
//! The backend answers most auth failures with a 2xx status and a body of the
//! form `{"error": "...", "details": {...}}`. The wire types below keep both
//! shapes; [`AuthReply::expect_message`] and [`MeReply::into_user`] turn them
//! into a `Result` with a structured [`ApiErrorKind`](crate::error::ApiErrorKind).

#[cfg(feature = "http")]
pub mod client;

use crate::error::AuthError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply message the backend sends on a successful login.
pub const LOGIN_SUCCESS: &str = "Login successful";

/// Reply message the backend sends on a successful registration.
pub const REGISTER_SUCCESS: &str = "User registered successfully";

// ============================================================================
// User profile types
// ============================================================================

/// The authenticated user's profile and balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl User {
    /// Balance held in `symbol`, if the user has that asset.
    pub fn balance(&self, symbol: &str) -> Option<Decimal> {
        self.assets
            .iter()
            .find(|a| a.symbol == symbol)
            .map(|a| a.amount)
    }
}

/// One asset balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub amount: Decimal,
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Reply to login, register, and logout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl AuthReply {
    /// Succeeds only when the reply carries exactly `expected` as its message.
    ///
    /// Returns the user echoed back in the reply, if any.
    pub fn expect_message(self, expected: &str) -> Result<Option<User>, AuthError> {
        if let Some(error) = &self.error {
            return Err(AuthError::rejected(error, self.details.as_ref()));
        }
        match self.message.as_deref() {
            Some(m) if m == expected => Ok(self.user),
            Some(m) => Err(AuthError::UnexpectedReply(m.to_string())),
            None => Err(AuthError::UnexpectedReply("reply had no message".to_string())),
        }
    }
}

/// Reply to `GET /auth/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeReply {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MeReply {
    pub fn into_user(self) -> Result<User, AuthError> {
        if let Some(error) = &self.error {
            return Err(AuthError::rejected(error, None));
        }
        self.user.ok_or(AuthError::NotAuthenticated)
    }
}
