//! Error variants: named kinds of `ChainableError`
//!
//! A variant is a marker type that fixes the name and default message of the
//! errors built from it. Declare variants with [`chainable_error!`](crate::chainable_error).

use super::{ChainableError, ErrorOptions, Info};

/// A named kind of `ChainableError` with a default message
///
/// # Example
///
/// ```rust
/// use cause_chain::{ErrorOptions, ErrorVariant};
///
/// struct QuotaExceeded;
///
/// impl ErrorVariant for QuotaExceeded {
///     const NAME: &'static str = "QuotaExceeded";
///     const MESSAGE: &'static str = "quota exceeded";
/// }
///
/// let err = QuotaExceeded::error(ErrorOptions::new());
/// assert_eq!(err.to_string(), "QuotaExceeded: quota exceeded");
/// assert!(err.is::<QuotaExceeded>());
/// ```
pub trait ErrorVariant: Sized + 'static {
    /// Name shown when rendering errors of this variant
    const NAME: &'static str;

    /// Message used when the construction options set none
    const MESSAGE: &'static str = "";

    /// Build an error of this variant
    #[track_caller]
    fn error(options: ErrorOptions) -> ChainableError {
        ChainableError::of::<Self>(options)
    }

    /// Build an error of this variant with the default message and no info
    #[track_caller]
    fn plain() -> ChainableError {
        ChainableError::of::<Self>(ErrorOptions::new())
    }

    /// Build an error of this variant with the default message and `info`
    #[track_caller]
    fn with_info(info: Info) -> ChainableError {
        ChainableError::of::<Self>(ErrorOptions::new().info(info))
    }
}

/// Declare one or more error variants
///
/// Each declaration produces a unit marker struct implementing
/// [`ErrorVariant`](crate::ErrorVariant), named after the struct.
///
/// ```rust
/// use cause_chain::{chainable_error, ErrorVariant};
///
/// chainable_error! {
///     /// Reading the manifest failed
///     pub struct ManifestError => "failed to read manifest";
///     pub(crate) struct LockError => "failed to take lock";
/// }
///
/// assert_eq!(ManifestError::plain().message(), "failed to read manifest");
/// ```
#[macro_export]
macro_rules! chainable_error {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident => $message:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis struct $name;

            impl $crate::ErrorVariant for $name {
                const NAME: &'static str = stringify!($name);
                const MESSAGE: &'static str = $message;
            }
        )+
    };
}
