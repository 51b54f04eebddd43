//! Merging info records across a chain

use super::Chain;
use crate::{ChainableError, Info};
use std::error::Error as StdError;

/// Merge the info of every `ChainableError` in the chain into one record
///
/// Deeper causes are applied first, so on a shared key the error closest to
/// the point of observation wins. Nodes without info, and errors of other
/// types, contribute nothing. Returns an empty record when no node has info.
pub fn full_info(error: &(dyn StdError + 'static)) -> Info {
    let records: Vec<&Info> = Chain::new(error)
        .filter_map(|node| node.downcast_ref::<ChainableError>())
        .filter_map(ChainableError::info)
        .collect();

    let mut merged = Info::new();
    for record in records.into_iter().rev() {
        merged.extend(record.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}
