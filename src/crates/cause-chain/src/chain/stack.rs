//! Full-stack reports

use super::{render, Chain};
use crate::ChainableError;
use std::error::Error as StdError;

/// Prefix of each cause summary line
pub const CAUSE_PREFIX: &str = "caused by: ";

/// Render the primary stack of `error` plus one summary line per cause
///
/// ```text
/// <Name>: <composed message>
///     at <frame>
///     ...
/// caused by: <Name>: <message>
/// caused by: <message of a foreign error>
/// ```
///
/// Causes are listed from the immediate cause down to the root, one line
/// each; their own frames are not expanded. A foreign error at the top of the
/// chain contributes only its `Display` text as the primary block.
pub fn full_stack(error: &(dyn StdError + 'static)) -> String {
    let mut lines = match error.downcast_ref::<ChainableError>() {
        Some(chained) => chained.stack_text(),
        None => error.to_string(),
    };

    for cause in Chain::new(error).skip(1) {
        lines.push('\n');
        lines.push_str(CAUSE_PREFIX);
        lines.push_str(&render(cause));
    }

    lines
}
