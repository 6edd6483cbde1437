//! Network URL constants for the FEX SDK.

/// Default REST API base URL (the backend's local bind address).
pub const DEFAULT_API_URL: &str = "http://localhost:3010";

/// Environment variable holding the deployment's API base URL.
pub const API_URL_ENV: &str = "FEX_API_URL";

/// REST path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v1";
