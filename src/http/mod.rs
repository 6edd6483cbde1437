//! HTTP client layer — `FexHttp` with a cookie jar and per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::FexHttp;
pub use retry::{RetryConfig, RetryPolicy};
