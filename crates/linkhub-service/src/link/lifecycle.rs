//! Lazy lifecycle state machine for shared links.
//!
//! There is no background timer: the `Active -> Expired` transition is
//! computed whenever a link record is read, and the result is written back
//! to the store best-effort so subsequent reads skip the recomputation.
//! `Expired` and `Revoked` are terminal — nothing here (or anywhere else)
//! moves a link out of either state.

use chrono::{DateTime, Utc};

use linkhub_entity::link::{LinkStatus, SharedLink};

/// The status a link effectively has at `now`.
///
/// Only `Active` links transition; terminal and unknown statuses pass
/// through unchanged, even if a clock anomaly would suggest otherwise.
pub fn effective_status(link: &SharedLink, now: DateTime<Utc>) -> LinkStatus {
    if link.status == LinkStatus::Active && link.expiry_passed(now) {
        LinkStatus::Expired
    } else {
        link.status
    }
}

/// Apply the lazy-expiry transition to every link in place.
///
/// Returns `true` if any link changed, in which case the caller should
/// write the collection back to the store.
pub fn apply_expiry_pass(links: &mut [SharedLink], now: DateTime<Utc>) -> bool {
    let mut changed = false;
    for link in links.iter_mut() {
        let effective = effective_status(link, now);
        if effective != link.status {
            link.status = effective;
            changed = true;
        }
    }
    changed
}
