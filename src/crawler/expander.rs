//! Prefix expansion decisions
//!
//! Given the page returned for a prefix, decide whether the branch is
//! exhausted or which child prefixes to explore next. This is the heart of
//! the crawl and is kept free of IO so the stop conditions can be tested
//! directly.
//!
//! The branch point comes from the page's anchor word: the last result in
//! the page, trusted to be lexicographically maximal. Everything returned
//! so far sorts at or below the anchor, so the only place further results
//! can hide is under prefixes at or after the anchor's symbol at the
//! current depth. If the endpoint ever returns unsorted pages that trust is
//! misplaced and coverage is no longer guaranteed.

use crate::alphabet::Alphabet;

/// What to do with a branch after seeing its page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDecision {
    /// The page was empty: nothing exists under this prefix
    StopEmpty,

    /// The page was shorter than the page cap: it was not truncated, so
    /// the branch is fully enumerated
    StopPartial,

    /// The page was truncated but the recursion budget is spent;
    /// under-coverage is accepted here
    StopMaxDepth,

    /// The anchor word is too short to carry a branch symbol at this depth
    StopShortAnchor,

    /// Descend: branch on `symbol` and its successors under `stem`
    Expand {
        /// First `depth` characters of the anchor word
        stem: String,
        /// The anchor's character at position `depth`
        symbol: char,
    },
}

/// Evaluates the page returned for a prefix at the given depth
///
/// # Arguments
///
/// * `results` - The page returned by the endpoint
/// * `depth` - Depth of the prefix that produced this page
/// * `page_cap` - The endpoint's declared maximum page size
/// * `max_depth` - Recursion budget for this run
pub fn evaluate_page(
    results: &[String],
    depth: usize,
    page_cap: usize,
    max_depth: usize,
) -> PageDecision {
    if results.is_empty() {
        return PageDecision::StopEmpty;
    }

    if results.len() < page_cap {
        return PageDecision::StopPartial;
    }

    if depth >= max_depth {
        return PageDecision::StopMaxDepth;
    }

    // Full page: branch on the anchor word's character at this depth
    let anchor = &results[results.len() - 1];
    let mut chars = anchor.chars();
    let stem: String = chars.by_ref().take(depth).collect();

    match chars.next() {
        Some(symbol) => PageDecision::Expand { stem, symbol },
        None => PageDecision::StopShortAnchor,
    }
}

/// Generates the child prefixes for an expansion decision
///
/// Children are `stem + s` for `s = symbol, next(symbol), ...` until the
/// alphabet runs out, in exploration order. A branch symbol outside the
/// alphabet produces no children; the alphabet's successor function is not
/// defined for it.
pub fn child_prefixes(stem: &str, symbol: char, alphabet: Alphabet) -> Vec<String> {
    if !alphabet.contains(symbol) {
        tracing::debug!(
            "Anchor symbol '{}' not in alphabet {:?}, not expanding '{}'",
            symbol,
            alphabet,
            stem
        );
        return Vec::new();
    }

    let mut children = Vec::new();
    let mut current = Some(symbol);
    while let Some(s) = current {
        let mut child = String::with_capacity(stem.len() + 1);
        child.push_str(stem);
        child.push(s);
        children.push(child);
        current = alphabet.next(s);
    }
    children
}
