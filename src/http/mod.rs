//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! caller builds RequestDescriptor
//!     → client.rs (implicit login, retry loop, forced re-auth)
//!     → request.rs (URL assembly)
//!     → response.rs (per-attempt classification)
//!     → error.rs (typed failures back to the caller)
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::SessionClient;
pub use error::{ClientError, ClientResult};
pub use request::RequestDescriptor;
