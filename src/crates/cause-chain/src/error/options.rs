//! Construction options for chainable errors

use serde_json::{Map, Value};

/// Structured diagnostic record attached to one error
pub type Info = Map<String, Value>;

/// Options accepted when constructing a `ChainableError`
///
/// Leaving `info` unset means the error carries no info record at all,
/// which is different from carrying an empty one.
///
/// # Example
///
/// ```rust
/// use cause_chain::ErrorOptions;
///
/// let options = ErrorOptions::new()
///     .message("failed to connect")
///     .entry("host", "db-1")
///     .entry("port", 5432);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorOptions {
    /// Message text; falls back to the variant's default when unset
    pub message: Option<String>,
    /// Structured info for this error alone
    pub info: Option<Info>,
}

impl ErrorOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the whole info record
    pub fn info(mut self, info: Info) -> Self {
        self.info = Some(info);
        self
    }

    /// Add one info entry, creating the record on first use
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.info
            .get_or_insert_with(Info::new)
            .insert(key.into(), value.into());
        self
    }

    pub(crate) fn or_message(mut self, default: &str) -> Self {
        if self.message.is_none() {
            self.message = Some(default.to_string());
        }
        self
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<Info>) {
        (self.message, self.info)
    }
}
