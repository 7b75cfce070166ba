//! Retry classification.
//!
//! # Responsibilities
//! - Decide which response statuses are transient (retried internally)
//! - Decide which transport failures are transient
//!
//! # Design Decisions
//! - Transient statuses are a fixed set: 500, 502, 504, 524
//! - Other 5xx are terminal; overload signals differ from hard faults
//! - Connection resets/refusals and timeouts retry; other OS errors propagate

use std::error::Error as _;

use reqwest::StatusCode;

/// Statuses retried without surfacing to the caller.
const TRANSIENT_STATUSES: [u16; 4] = [500, 502, 504, 524];

/// Whether a response status should be retried after backoff.
pub fn is_transient_status(status: StatusCode) -> bool {
    TRANSIENT_STATUSES.contains(&status.as_u16())
}

/// Whether a transport-level failure is worth retrying.
///
/// Timeouts and connect failures are transient, as are dropped sockets
/// (reset, aborted, broken pipe). Anything else — TLS setup, request
/// construction, malformed responses — propagates unchanged.
pub fn is_transient_transport(err: &reqwest::Error) -> bool {
    if err.is_timeout() || err.is_connect() {
        return true;
    }

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            return matches!(
                io.kind(),
                std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::BrokenPipe
            );
        }
        source = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_status_set() {
        for code in [500, 502, 504, 524] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(is_transient_status(status), "{code} should be transient");
        }
    }

    #[test]
    fn test_terminal_statuses() {
        for code in [404, 429, 501, 503, 505] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(!is_transient_status(status), "{code} should be terminal");
        }
    }
}
