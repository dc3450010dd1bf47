//! Accumulator for discovered names and the external call counter
//!
//! The store is the only mutable state shared across branches of a crawl.
//! It deduplicates by exact string identity, which is what lets the crawler
//! tolerate overlapping branches without tracking which prefixes it has
//! already explored: redundant fetches collapse here.

use std::collections::HashSet;

/// Deduplicating accumulator of crawl results plus the API call counter
#[derive(Debug, Default)]
pub struct ResultStore {
    names: HashSet<String>,
    calls: u64,
}

impl ResultStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every result, returning how many were not already present
    ///
    /// Insertion is an idempotent set union: duplicates across branches
    /// collapse silently.
    pub fn add_all<I>(&mut self, results: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.names.len();
        self.names.extend(results);
        self.names.len() - before
    }

    /// Records one completed query against the remote API
    ///
    /// Called once per query invocation, including replays after throttling.
    pub fn record_call(&mut self) {
        self.calls += 1;
    }

    /// Returns the number of unique names collected so far
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns the total number of external calls made so far
    pub fn call_count(&self) -> u64 {
        self.calls
    }

    /// Returns all collected names, sorted
    ///
    /// Sorting happens only here, at reporting time; the store itself is
    /// unordered.
    pub fn snapshot(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}
