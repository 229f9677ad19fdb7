// src/core/engine.rs
use crate::core::grid::Grid;
use crate::core::scanner;
use crate::core::types::{FoundWord, MAX_RESULTS};
use crate::error::Result;
use std::collections::HashSet;
use tracing::{debug, info};

/// Searches a fixed character grid for query words along rows and columns.
///
/// The grid is built once at construction and shared read-only by every
/// search; `find` keeps no state across calls.
pub struct WordFinder {
    grid: Grid,
}

impl WordFinder {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Builds the grid from raw rows and wraps it. Fails with
    /// [`InvalidMatrixError`](crate::error::InvalidMatrixError) if the rows
    /// do not form a rectangle.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Ok(Self::new(Grid::build(rows)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the top words from the stream by total occurrence count,
    /// most frequent first, at most ten.
    ///
    /// See [`find_counts`](Self::find_counts) for the full contract; this is
    /// the same search with the counts stripped off.
    pub fn find<I, S>(&self, wordstream: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_counts(wordstream)
            .into_iter()
            .map(|found| found.word)
            .collect()
    }

    /// Runs the stream of query words against the grid and returns the
    /// matched words with their totals, ranked by total descending, limited
    /// to the ten most frequent.
    ///
    /// A word's total is its horizontal count plus its vertical count; the
    /// two directions are scanned as an independent fork-join pair. Words
    /// with a total of zero are dropped. Ties rank in the order the words
    /// were first seen in the stream.
    ///
    /// A word that already appeared earlier in the same stream is skipped
    /// entirely: it is not re-counted, and the later duplicate does not
    /// refresh its rank position. Empty-string queries are rejected up
    /// front and never counted.
    pub fn find_counts<I, S>(&self, wordstream: I) -> Vec<FoundWord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut counts: Vec<FoundWord> = Vec::new();

        for word in wordstream {
            let word = word.as_ref();
            if word.is_empty() {
                debug!("skipping empty query word");
                continue;
            }
            if !seen.insert(word.to_string()) {
                continue;
            }

            let (horizontal, vertical) = rayon::join(
                || scanner::count_horizontal(&self.grid, word),
                || scanner::count_vertical(&self.grid, word),
            );
            let total = horizontal + vertical;
            debug!(word, horizontal, vertical, total, "scanned word");

            if total > 0 {
                counts.push(FoundWord {
                    word: word.to_string(),
                    total,
                });
            }
        }

        // Stable sort over the insertion-ordered entries keeps ties in
        // first-encounter order.
        counts.sort_by_key(|found| std::cmp::Reverse(found.total));
        counts.truncate(MAX_RESULTS);

        info!(
            queried = seen.len(),
            matched = counts.len(),
            "word search complete"
        );
        counts
    }
}
