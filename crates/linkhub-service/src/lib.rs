//! # linkhub-service
//!
//! Business logic service layer for LinkHub. Each service orchestrates the
//! persisted link store to implement application-level use cases: link
//! creation and lifecycle, access validation and recording, usage
//! analytics, and retention.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every read path runs the
//! lazy-expiry pass before interpreting link state, so expired links are
//! never reported as active.

pub mod access;
pub mod analytics;
pub mod link;
pub mod retention;

pub use access::{AccessRecorder, AccessValidator, InvalidReason, ValidationOutcome};
pub use analytics::AnalyticsService;
pub use link::{ExpiryCalculator, LinkService, TokenGenerator};
pub use retention::RetentionService;
