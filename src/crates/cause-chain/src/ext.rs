//! `Result` extension for wrapping errors in flight

use crate::ChainableError;
use std::error::Error as StdError;

/// Wrap the error of a `Result` in a `ChainableError`
///
/// # Example
///
/// ```rust
/// use cause_chain::{chainable_error, ErrorOptions, ErrorVariant, ResultExt};
///
/// chainable_error! {
///     struct ReadConfigError => "failed to read config";
/// }
///
/// let result: Result<String, std::io::Error> = Err(std::io::Error::other("not found"));
/// let err = result
///     .wrap_with(|| ReadConfigError::error(ErrorOptions::new().entry("path", "app.toml")))
///     .unwrap_err();
///
/// assert_eq!(err.message(), "failed to read config: not found");
/// ```
pub trait ResultExt<T> {
    /// On `Err(e)`, build the wrapping error with `f` and attach `e` as its cause
    ///
    /// `f` only runs when there is an error.
    fn wrap_with<F>(self, f: F) -> Result<T, ChainableError>
    where
        F: FnOnce() -> ChainableError;

    /// On `Err(e)`, attach `e` as the cause of `error`
    fn wrap_err(self, error: ChainableError) -> Result<T, ChainableError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn wrap_with<F>(self, f: F) -> Result<T, ChainableError>
    where
        F: FnOnce() -> ChainableError,
    {
        self.map_err(|e| f().with_cause(e))
    }

    fn wrap_err(self, error: ChainableError) -> Result<T, ChainableError> {
        self.map_err(|e| error.with_cause(e))
    }
}
