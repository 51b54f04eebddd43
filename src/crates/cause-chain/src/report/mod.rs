//! Serializable snapshots of an error chain
//!
//! `ErrorReport` captures everything a log or telemetry collaborator needs
//! from a chain in one structured value: the canonical headline, one line per
//! cause, the merged info and the full-stack text.

use crate::chain::{self, Chain};
use crate::{Info, Result};
use serde::Serialize;
use std::error::Error as StdError;

/// Structured view of a whole error chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Canonical rendering of the outermost error
    pub headline: String,
    /// Canonical rendering of each cause, immediate cause first
    pub causes: Vec<String>,
    /// Info merged across the chain; omitted from JSON when empty
    #[serde(skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    /// Full-stack text of the chain
    pub stack: String,
}

impl ErrorReport {
    /// Snapshot the chain starting at `error`
    pub fn new(error: &(dyn StdError + 'static)) -> Self {
        let mut rendered = Chain::new(error).map(chain::render);
        let headline = rendered.next().unwrap_or_default();

        Self {
            headline,
            causes: rendered.collect(),
            info: chain::full_info(error),
            stack: chain::full_stack(error),
        }
    }

    /// Number of errors in the chain
    pub fn depth(&self) -> usize {
        1 + self.causes.len()
    }

    /// Compact JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty JSON form, for humans reading logs
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON value form
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<'a> From<&'a (dyn StdError + 'static)> for ErrorReport {
    fn from(error: &'a (dyn StdError + 'static)) -> Self {
        Self::new(error)
    }
}
