//! Linear backoff between retry attempts.

use std::time::Duration;

/// Calculate the delay before a given attempt (zero-based).
///
/// The first attempt runs immediately; attempt N waits `N x unit`. The
/// schedule is intentionally linear rather than exponential: with the
/// default 2s unit and a 5-attempt budget it runs 0s, 2s, 4s, 6s, 8s.
pub fn linear_backoff(attempt: u32, unit: Duration) -> Duration {
    unit.saturating_mul(attempt)
}
