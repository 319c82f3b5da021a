//! Shared link entity and related enums.

pub mod expiration;
pub mod model;

pub use expiration::ExpirationOption;
pub use model::{LinkOrigin, LinkStatus, LinkUpdate, SharedLink};
