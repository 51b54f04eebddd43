//! The chainable error type
//!
//! A `ChainableError` carries a message, an optional structured info record
//! and at most one cause. Attaching a cause extends the message with the
//! cause's text, so the message of the outermost error reads as the whole
//! story from most general to most specific.
//!
//! # Example
//!
//! ```rust
//! use cause_chain::{ChainableError, ErrorOptions};
//!
//! let inner = std::io::Error::other("disk full");
//! let err = ChainableError::with_options(
//!     ErrorOptions::new().message("failed to save").entry("path", "/tmp/a"),
//! )
//! .with_cause(inner);
//!
//! assert_eq!(err.message(), "failed to save: disk full");
//! assert_eq!(err.to_string(), "ChainableError: failed to save: disk full");
//! ```

mod options;
mod variant;

pub use options::{ErrorOptions, Info};
pub use variant::ErrorVariant;

use crate::trace::StackTrace;
use crate::{ChainError, Result};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Separator placed between a message and its cause's message
pub const MESSAGE_SEPARATOR: &str = ": ";

/// Name used by errors built without a variant
pub const BASE_NAME: &str = "ChainableError";

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Base error that can wrap a prior error as its cause
#[derive(Debug)]
pub struct ChainableError {
    name: Cow<'static, str>,
    variant: TypeId,
    own_message: String,
    message: String,
    info: Option<Info>,
    cause: Option<Cause>,
    stack: StackTrace,
}

impl ChainableError {
    /// Create a base error with just a message
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(
            Cow::Borrowed(BASE_NAME),
            TypeId::of::<Self>(),
            ErrorOptions::new().message(message),
        )
    }

    /// Create a base error from construction options
    #[track_caller]
    pub fn with_options(options: ErrorOptions) -> Self {
        Self::build(Cow::Borrowed(BASE_NAME), TypeId::of::<Self>(), options)
    }

    /// Create an error of variant `V`
    ///
    /// The variant's default message applies unless `options` sets one.
    #[track_caller]
    pub fn of<V: ErrorVariant>(options: ErrorOptions) -> Self {
        let options = options.or_message(V::MESSAGE);
        Self::build(Cow::Borrowed(V::NAME), TypeId::of::<V>(), options)
    }

    #[track_caller]
    fn build(name: Cow<'static, str>, variant: TypeId, options: ErrorOptions) -> Self {
        let (message, info) = options.into_parts();
        let message = message.unwrap_or_default();

        Self {
            name,
            variant,
            own_message: message.clone(),
            message,
            info,
            cause: None,
            stack: StackTrace::capture(),
        }
    }

    /// Attach `cause` and extend the message with its text
    ///
    /// Replaces any cause attached earlier, rebuilding the message from this
    /// error's own text. Use [`ChainableError::try_with_cause`] to reject a
    /// second attachment instead.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.attach(Box::new(cause));
        self
    }

    /// Attach `cause`, failing if this error already has one
    pub fn try_with_cause<E>(mut self, cause: E) -> Result<Self>
    where
        E: StdError + Send + Sync + 'static,
    {
        if self.cause.is_some() {
            return Err(ChainError::CauseAlreadySet {
                name: self.name.into_owned(),
            });
        }
        self.attach(Box::new(cause));
        Ok(self)
    }

    /// Attach an already boxed cause, replacing any earlier one
    pub fn with_boxed_cause(mut self, cause: Cause) -> Self {
        self.attach(cause);
        self
    }

    fn attach(&mut self, cause: Cause) {
        if self.cause.is_some() {
            tracing::warn!(
                error = %self.name,
                "Replacing cause already attached to error"
            );
        }

        let cause_text = match cause.downcast_ref::<ChainableError>() {
            Some(chained) => chained.message.clone(),
            None => cause.to_string(),
        };

        self.message = format!("{}{}{}", self.own_message, MESSAGE_SEPARATOR, cause_text);
        tracing::debug!(error = %self.name, cause = %cause_text, "Attached cause");
        self.cause = Some(cause);
    }

    /// Merge `info` into this error's own info record
    ///
    /// Creates the record if absent. Keys in `info` win on collision.
    pub fn with_info(mut self, info: Info) -> Self {
        match self.info.as_mut() {
            Some(existing) => existing.extend(info),
            None => self.info = Some(info),
        }
        self
    }

    /// Variant name used when rendering
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Composed message, including the text of every cause
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message supplied at construction, without cause text
    pub fn own_message(&self) -> &str {
        &self.own_message
    }

    /// Info supplied for this error alone, if any
    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// The attached cause, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Stack trace captured at construction
    pub fn stack(&self) -> &StackTrace {
        &self.stack
    }

    /// Whether this error was built as variant `V`
    pub fn is<V: ErrorVariant>(&self) -> bool {
        self.variant == TypeId::of::<V>()
    }

    /// Whether this error was built without a variant
    pub fn is_base(&self) -> bool {
        self.variant == TypeId::of::<Self>()
    }

    /// Primary stack text: the canonical rendering followed by frame lines
    pub fn stack_text(&self) -> String {
        let mut out = self.to_string();
        for line in self.stack.frame_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }

    /// Info merged across this error and all of its causes
    pub fn full_info(&self) -> Info {
        crate::chain::full_info(self)
    }

    /// Primary stack plus one `caused by:` line per cause
    pub fn full_stack(&self) -> String {
        crate::chain::full_stack(self)
    }
}

impl fmt::Display for ChainableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}{}{}", self.name, MESSAGE_SEPARATOR, self.message)
        }
    }
}

impl StdError for ChainableError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl Serialize for ChainableError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.info.is_some()) + usize::from(self.cause.is_some());
        let mut state = serializer.serialize_struct("ChainableError", len)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("message", &self.message)?;
        if let Some(info) = &self.info {
            state.serialize_field("info", info)?;
        } else {
            state.skip_field("info")?;
        }
        if let Some(cause) = &self.cause {
            state.serialize_field("cause", &crate::chain::render(&**cause))?;
        } else {
            state.skip_field("cause")?;
        }
        state.end()
    }
}
