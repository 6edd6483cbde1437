//! The seams between stores and the backend.
//!
//! Stores only see these traits, so tests (and alternative transports) can
//! stand in for [`FexClient`](crate::client::FexClient).

use async_trait::async_trait;

use crate::auth::User;
use crate::domain::market::MarketDescriptor;
use crate::error::SdkError;

/// Session endpoints used by [`SessionStore`](super::SessionStore).
#[async_trait]
pub trait SessionApi: Send + Sync + 'static {
    /// `GET /auth/me`.
    async fn me(&self) -> Result<User, SdkError>;

    /// `POST /auth/login`. `Ok` only on the backend's success message.
    async fn login(&self, email: &str, password: &str) -> Result<Option<User>, SdkError>;

    /// `POST /auth/register`. `Ok` only on the backend's success message.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, SdkError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), SdkError>;
}

/// Market endpoints used by [`MarketStore`](super::MarketStore).
#[async_trait]
pub trait MarketApi: Send + Sync + 'static {
    /// `GET /markets`.
    async fn list_markets(&self) -> Result<Vec<MarketDescriptor>, SdkError>;
}

#[cfg(feature = "http")]
mod http_impl {
    use super::*;
    use crate::client::FexClient;

    #[async_trait]
    impl SessionApi for FexClient {
        async fn me(&self) -> Result<User, SdkError> {
            self.auth().me().await
        }

        async fn login(&self, email: &str, password: &str) -> Result<Option<User>, SdkError> {
            self.auth().login(email, password).await
        }

        async fn register(
            &self,
            username: &str,
            email: &str,
            password: &str,
        ) -> Result<Option<User>, SdkError> {
            self.auth().register(username, email, password).await
        }

        async fn logout(&self) -> Result<(), SdkError> {
            self.auth().logout().await
        }
    }

    #[async_trait]
    impl MarketApi for FexClient {
        async fn list_markets(&self) -> Result<Vec<MarketDescriptor>, SdkError> {
            self.markets().list().await
        }
    }
}
