// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Number of overlapping start positions at which a word matches.
pub type OccurrenceCount = u64;

/// Maximum number of words a search reports.
pub const MAX_RESULTS: usize = 10;

/// A word that matched somewhere in the grid, with its total count.
///
/// `total` is the sum of the horizontal and vertical occurrence counts
/// across the whole grid. Words with a total of zero are never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub total: OccurrenceCount,
}
