//! Clock used by the aggregate.

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time truncated to microseconds.
///
/// Storage columns keep microsecond precision, so every timestamp the domain
/// produces is truncated the same way to compare equal after a round-trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
