//! Usage analytics over the link population and access history.

pub mod service;

pub use service::{AnalyticsService, LinkAnalytics, OriginCounts, StatusCounts};
