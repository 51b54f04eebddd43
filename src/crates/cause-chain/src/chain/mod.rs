//! Chain walking utilities
//!
//! A chain is the sequence of errors linked through `source()`, from the error
//! under inspection down to its root cause. `ChainableError` nodes carry
//! structured info; any other error is an opaque node that is rendered through
//! its own `Display` and contributes no info.
//!
//! # Example
//!
//! ```rust
//! use cause_chain::{chain_length, full_info, full_stack, root_cause, ErrorOptions, ChainableError};
//!
//! let inner = ChainableError::with_options(
//!     ErrorOptions::new().message("failed to bar").entry("database", "a"),
//! )
//! .with_cause(std::io::Error::other("internal error"));
//! let outer = ChainableError::with_options(
//!     ErrorOptions::new().message("failed to foo").entry("userId", 123),
//! )
//! .with_cause(inner);
//!
//! assert_eq!(chain_length(&outer), 3);
//! assert_eq!(root_cause(&outer).to_string(), "internal error");
//! assert_eq!(full_info(&outer).len(), 2);
//! assert_eq!(full_stack(&outer).matches("caused by: ").count(), 2);
//! ```

mod info;
mod stack;

pub use info::full_info;
pub use stack::{full_stack, CAUSE_PREFIX};

use crate::ChainableError;
use std::error::Error as StdError;

/// Iterator over an error and each of its causes, outermost first
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start walking at `error`
    pub fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(error) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Get the root cause of an error chain
pub fn root_cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Count the number of errors in an error chain (minimum 1)
pub fn chain_length(error: &(dyn StdError + 'static)) -> usize {
    Chain::new(error).count()
}

/// Canonical single-line text of one chain node
///
/// `ChainableError` renders as `<name>: <message>`; anything else through its
/// own `Display`.
pub fn render(error: &(dyn StdError + 'static)) -> String {
    match error.downcast_ref::<ChainableError>() {
        Some(chained) => chained.to_string(),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorOptions;

    fn three_level() -> ChainableError {
        let bar = ChainableError::with_options(ErrorOptions::new().message("failed to bar"))
            .with_cause(std::io::Error::other("internal error"));
        ChainableError::with_options(ErrorOptions::new().message("failed to foo")).with_cause(bar)
    }

    #[test]
    fn test_chain_iterates_outermost_first() {
        let err = three_level();
        let rendered: Vec<String> = Chain::new(&err).map(render).collect();
        assert_eq!(
            rendered,
            vec![
                "ChainableError: failed to foo: failed to bar: internal error",
                "ChainableError: failed to bar: internal error",
                "internal error",
            ]
        );
    }

    #[test]
    fn test_root_cause() {
        let err = three_level();
        assert_eq!(root_cause(&err).to_string(), "internal error");
    }

    #[test]
    fn test_root_cause_borrows_from_local_error() {
        let err = three_level();
        let root = root_cause(&err);
        assert!(root.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(render(root), "internal error");
    }

    #[test]
    fn test_single_error_chain() {
        let err = ChainableError::new("alone");
        assert_eq!(chain_length(&err), 1);
        assert_eq!(render(root_cause(&err)), "ChainableError: alone");
    }

    #[test]
    fn test_chain_length() {
        assert_eq!(chain_length(&three_level()), 3);
    }

    #[test]
    fn test_chain_follows_foreign_sources() {
        let foreign = anyhow::anyhow!("disk unplugged").context("read failed");
        let err = ChainableError::new("load failed").with_boxed_cause(foreign.into());
        assert_eq!(chain_length(&err), 3);
        assert_eq!(root_cause(&err).to_string(), "disk unplugged");
    }
}
