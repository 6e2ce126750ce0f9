use std::collections::HashMap;

use tracing::debug;

use crate::error::{FinderError, Result};
use crate::grid::GridIndex;

/// Most words a ranking returns.
pub const TOP_N: usize = 10;

/// Ranks words from a candidate stream by how often they were requested,
/// keeping only those present in the grid.
#[derive(Debug, Clone, Copy)]
pub struct WordRanker<'g> {
    grid: &'g GridIndex,
}

impl<'g> WordRanker<'g> {
    pub fn new(grid: &'g GridIndex) -> Self {
        Self { grid }
    }

    /// Returns at most [`TOP_N`] grid words, highest stream count first and
    /// ties in ascending word order.
    ///
    /// `None` is an absent stream and fails with [`FinderError::NullInput`];
    /// an empty stream yields an empty list. Any empty word fails the whole
    /// call with [`FinderError::InvalidWord`].
    pub fn find<I, S>(&self, stream: Option<I>) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stream = stream.ok_or(FinderError::NullInput)?;

        // one pass yields both the distinct words and their stream counts
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;
        for word in stream {
            *counts.entry(word.as_ref().to_owned()).or_insert(0) += 1;
            total += 1;
        }
        if counts.contains_key("") {
            return Err(FinderError::InvalidWord);
        }

        let distinct = counts.len();
        let mut table: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(word, _)| self.grid.contains(word))
            .collect();
        let matched = table.len();

        table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        table.truncate(TOP_N);

        debug!(total, distinct, matched, "ranked word stream");
        Ok(table.into_iter().map(|(word, _)| word).collect())
    }
}
