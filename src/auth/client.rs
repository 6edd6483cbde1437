//! Auth sub-client — login, register, logout, session validation.

use crate::auth::{
    AuthReply, LoginRequest, MeReply, RegisterRequest, User, LOGIN_SUCCESS, REGISTER_SUCCESS,
};
use crate::client::FexClient;
use crate::error::SdkError;
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FexClient,
}

impl<'a> Auth<'a> {
    /// Validate the current session cookie and return the full profile.
    ///
    /// Calls `GET /api/v1/auth/me`. A 2xx reply carrying an `error` field is
    /// a failure, same as a 401.
    pub async fn me(&self) -> Result<User, SdkError> {
        let url = self.client.http.endpoint("/auth/me");
        let reply: MeReply = self.client.http.get(&url, RetryPolicy::None).await?;
        Ok(reply.into_user()?)
    }

    /// Log in with email and password.
    ///
    /// On success the backend sets the session cookie, which the client's
    /// cookie jar keeps. The returned user is the backend's echo and carries
    /// no balances; call [`Auth::me`] for those.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, SdkError> {
        let url = self.client.http.endpoint("/auth/login");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let reply: AuthReply = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await?;
        Ok(reply.expect_message(LOGIN_SUCCESS)?)
    }

    /// Create an account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, SdkError> {
        let url = self.client.http.endpoint("/auth/register");
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let reply: AuthReply = self
            .client
            .http
            .post(&url, &request, RetryPolicy::None)
            .await?;
        Ok(reply.expect_message(REGISTER_SUCCESS)?)
    }

    /// Ask the backend to clear the session cookie.
    ///
    /// Any 2xx reply counts as success; the body is not inspected.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let url = self.client.http.endpoint("/auth/logout");
        let _: serde_json::Value = self
            .client
            .http
            .post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await?;
        Ok(())
    }
}
