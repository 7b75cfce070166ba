//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries and tests
//! - Keep the client itself free of user-facing output
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Level configurable via RUST_LOG with a caller-supplied fallback
//! - The client only emits debug/warn diagnostics; user-visible messaging
//!   belongs to callers

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_filter` applies when RUST_LOG is not set, e.g.
/// `"session_client=debug"`. Call once at startup; a second call panics in
/// tracing-subscriber.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
