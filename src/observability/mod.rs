//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! request pipeline produces:
//!     → logging.rs (structured trace events, request ID on every event)
//!
//! Consumers:
//!     → whatever subscriber the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured fields over formatted strings
//! - A per-call request ID correlates every event of one logical request,
//!   including its retries and any forced re-login

pub mod logging;

pub use logging::init_logging;
