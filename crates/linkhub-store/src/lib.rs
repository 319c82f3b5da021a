//! # linkhub-store
//!
//! Persisted store providers for LinkHub. The consumer-side contract is a
//! named-record key-value store holding the full link collection and the
//! capped access log; it supports two modes:
//!
//! - **memory**: In-process records held in a [dashmap](https://crates.io/crates/dashmap)
//! - **redis**: Redis-backed records using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. Every
//! mutation is a read-full-record / write-full-record cycle; the store
//! offers last-write-wins semantics and no cross-caller locking.

pub mod adapter;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use adapter::LinkStore;
pub use provider::StoreManager;
