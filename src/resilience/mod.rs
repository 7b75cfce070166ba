//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request attempt fails:
//!     → retries.rs (is the status / transport error transient?)
//!     → backoff.rs (how long to wait before the next attempt)
//!     → retry loop in http/client.rs dispatches on the answer
//! ```
//!
//! # Design Decisions
//! - Backoff is linear and deterministic; the schedule is part of the
//!   protocol contract, not a tuning knob
//! - The attempt budget bounds worst-case latency; the client imposes no
//!   wall-clock deadline of its own

pub mod backoff;
pub mod retries;
