//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses, where they differ
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod market;
pub mod trade;
