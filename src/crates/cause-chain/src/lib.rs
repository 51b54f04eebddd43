//! Chainable errors for the catch, wrap and re-throw idiom
//!
//! This crate provides a base error type that wraps a lower-level failure in a
//! higher-level, domain-specific error while keeping the original failure
//! reachable as its cause.
//!
//! # Modules
//!
//! - `error` - `ChainableError`, its construction options and error variants
//! - `chain` - Chain walking: merged info, full-stack reports, root cause
//! - `trace` - Stack trace capture anchored at the construction site
//! - `report` - Serializable snapshots of a whole chain
//! - `config` - Process-wide capture settings with environment loading
//! - `logging` - Emitting a whole chain as one tracing event
//! - `ext` - `Result` extension for wrapping errors in flight
//!
//! # Example
//!
//! ```rust
//! use cause_chain::{chainable_error, full_info, full_stack, ErrorOptions, ErrorVariant};
//!
//! chainable_error! {
//!     /// Raised when loading a user fails
//!     pub struct LoadUserError => "failed to load user";
//! }
//!
//! fn load_user() -> Result<(), cause_chain::ChainableError> {
//!     let io = std::io::Error::other("connection reset");
//!     Err(LoadUserError::error(ErrorOptions::new().entry("userId", 123)).with_cause(io))
//! }
//!
//! let err = load_user().unwrap_err();
//! assert_eq!(err.message(), "failed to load user: connection reset");
//! assert_eq!(full_info(&err)["userId"], 123);
//! assert!(full_stack(&err).lines().any(|l| l == "caused by: connection reset"));
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod ext;
pub mod logging;
pub mod report;
pub mod trace;

use thiserror::Error;

pub use chain::{chain_length, full_info, full_stack, root_cause, Chain};
pub use config::ChainConfig;
pub use error::{ChainableError, ErrorOptions, ErrorVariant, Info};
pub use ext::ResultExt;
pub use report::ErrorReport;
pub use trace::{Frame, StackTrace};

/// Errors raised by the library itself
#[derive(Debug, Error)]
pub enum ChainError {
    /// A cause was attached to an error that already had one
    #[error("Invalid usage: {name} already has a cause attached")]
    CauseAlreadySet { name: String },

    /// Configuration could not be loaded or installed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_already_set_message() {
        let err = ChainError::CauseAlreadySet {
            name: "LoadUserError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid usage: LoadUserError already has a cause attached"
        );
    }
}
