//! # linkhub-api
//!
//! HTTP API layer for LinkHub. Exposes the consumer-facing link lifecycle
//! operations over Axum: creation, listing, lookup, revocation, deletion,
//! public token validation, access recording, analytics, and the retention
//! sweep trigger.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
