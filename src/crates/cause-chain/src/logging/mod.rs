//! Logging utilities
//!
//! Emits a whole error chain as a single structured tracing event.

use crate::report::ErrorReport;
use std::error::Error as StdError;
use tracing::{debug, error, info, warn};

/// Log levels for chain emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Emit one event describing the chain starting at `err`
///
/// The event carries the canonical headline as `error`, the merged info as a
/// JSON string in `info`, the chain depth in `depth` and the full-stack text
/// in `stack`.
///
/// # Example
///
/// ```rust
/// use cause_chain::logging::{log_chain, LogLevel};
/// use cause_chain::ChainableError;
///
/// let err = ChainableError::new("failed to sync").with_cause(std::io::Error::other("timeout"));
/// log_chain(&err, LogLevel::Error);
/// ```
pub fn log_chain(err: &(dyn StdError + 'static), level: LogLevel) -> ErrorReport {
    let report = ErrorReport::new(err);
    let info = serde_json::Value::Object(report.info.clone());
    let depth = report.depth();

    match level {
        LogLevel::Debug => {
            debug!(error = %report.headline, info = %info, depth, stack = %report.stack, "Error chain")
        }
        LogLevel::Info => {
            info!(error = %report.headline, info = %info, depth, stack = %report.stack, "Error chain")
        }
        LogLevel::Warn => {
            warn!(error = %report.headline, info = %info, depth, stack = %report.stack, "Error chain")
        }
        LogLevel::Error => {
            error!(error = %report.headline, info = %info, depth, stack = %report.stack, "Error chain")
        }
    }

    report
}
