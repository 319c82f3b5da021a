//! Expiry instant calculation for new shared links.

use chrono::{DateTime, Duration, Utc};

use linkhub_entity::link::ExpirationOption;

/// Maps a creation request and duration preset to an absolute expiry instant.
#[derive(Debug, Clone, Default)]
pub struct ExpiryCalculator;

impl ExpiryCalculator {
    /// Create a new expiry calculator.
    pub fn new() -> Self {
        Self
    }

    /// Compute the expiry instant for a link created at `now`.
    ///
    /// A `Custom` option uses `custom` only when it lies in the future;
    /// otherwise the 24-hour default applies. Computed instants are always
    /// strictly after `now`.
    pub fn compute(
        &self,
        now: DateTime<Utc>,
        option: ExpirationOption,
        custom: Option<DateTime<Utc>>,
    ) -> DateTime<Utc> {
        match option {
            ExpirationOption::TwoHours => now + Duration::hours(2),
            ExpirationOption::OneDay => now + Duration::hours(24),
            ExpirationOption::OneWeek => now + Duration::days(7),
            ExpirationOption::OneMonth => now + Duration::days(30),
            ExpirationOption::Custom => custom
                .filter(|instant| *instant > now)
                .unwrap_or_else(|| now + Duration::hours(24)),
        }
    }
}
