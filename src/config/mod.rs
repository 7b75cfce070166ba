//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → ClientConfig (validated, immutable)
//!     → owned by the SessionClient for its lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a client is constructed
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ClientConfig, CredentialsConfig, RetryConfig};
pub use validation::{validate_config, ValidationError};
