//! Crawl coordinator - drives the prefix expansion to completion
//!
//! This module owns the run loop that coordinates the whole sweep:
//! - Seeding one branch per first-level alphabet symbol
//! - Working each branch depth-first through an explicit frame stack
//! - Pacing every call through the rate limiter
//! - Replaying throttled queries and abandoning failed branches
//! - Accumulating results and producing the final report
//!
//! Branches are worked off an explicit worklist instead of call-stack
//! recursion, so a wide alphabet or a deep run cannot exhaust the host
//! stack. Frames are pushed so that each child branch finishes before its
//! next sibling starts, which keeps the traversal order identical to a
//! recursive descent.

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::crawler::expander::{child_prefixes, evaluate_page, PageDecision};
use crate::crawler::fetcher::{build_http_client, Fetcher, QueryOutcome};
use crate::crawler::limiter::RateLimiter;
use crate::output::CrawlReport;
use crate::store::ResultStore;
use crate::SweepError;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One pending branch: a prefix awaiting its query
#[derive(Debug)]
struct Frame {
    prefix: String,
    depth: usize,
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    alphabet: Alphabet,
    fetcher: Fetcher,
    limiter: RateLimiter,
    store: Arc<Mutex<ResultStore>>,
    started_at: DateTime<Utc>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The validated sweep configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SweepError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, SweepError> {
        let client = build_http_client()?;

        let fetcher = Fetcher::new(
            client,
            config.api.endpoint.clone(),
            config.api.effective_page_cap(),
        );

        let limiter = RateLimiter::new(
            config.api.effective_rate_budget(),
            Duration::from_secs(config.crawl.throttle_cooldown_secs),
        );

        let alphabet = config.api.version.alphabet();

        Ok(Self {
            config: Arc::new(config),
            alphabet,
            fetcher,
            limiter,
            store: Arc::new(Mutex::new(ResultStore::new())),
            started_at: Utc::now(),
        })
    }

    /// Runs the sweep to completion
    ///
    /// Seeds one branch per first-level symbol and works each branch to
    /// exhaustion before starting the next. Even when this returns an
    /// error, everything collected so far remains available through
    /// `report` and `snapshot`.
    pub async fn run(&mut self) -> Result<(), SweepError> {
        let seeds = self.alphabet.seed_symbols();
        tracing::info!(
            "Starting sweep of {} ({} seed symbols, page cap {}, depth limit {})",
            self.config.api.endpoint,
            seeds.len(),
            self.fetcher.page_cap(),
            self.config.crawl.max_depth
        );

        for seed in seeds.chars() {
            tracing::debug!("Expanding seed branch '{}'", seed);
            self.expand_branch(seed).await?;
        }

        let store = self.store.lock().unwrap();
        tracing::info!(
            "Sweep complete: {} unique names in {} calls",
            store.count(),
            store.call_count()
        );

        Ok(())
    }

    /// Works one seed branch depth-first until its worklist drains
    async fn expand_branch(&self, seed: char) -> Result<(), SweepError> {
        let page_cap = self.fetcher.page_cap();
        let max_depth = self.config.crawl.max_depth;

        let mut stack = vec![Frame {
            prefix: seed.to_string(),
            depth: 1,
        }];

        while let Some(frame) = stack.pop() {
            let results = match self.fetch_with_retry(&frame.prefix).await? {
                Some(results) => results,
                // Transport failure: this branch is abandoned, the rest of
                // the worklist is untouched
                None => continue,
            };

            let decision = evaluate_page(&results, frame.depth, page_cap, max_depth);

            if !results.is_empty() {
                let added = self.store.lock().unwrap().add_all(results);
                tracing::trace!("'{}': {} new names", frame.prefix, added);
            }

            match decision {
                PageDecision::Expand { stem, symbol } => {
                    let children = child_prefixes(&stem, symbol, self.alphabet);
                    tracing::trace!(
                        "'{}' truncated, descending into {} children of '{}'",
                        frame.prefix,
                        children.len(),
                        stem
                    );
                    // Reverse so the first sibling is popped first
                    for child in children.into_iter().rev() {
                        stack.push(Frame {
                            prefix: child,
                            depth: frame.depth + 1,
                        });
                    }
                }
                stop => {
                    tracing::trace!("'{}' terminal: {:?}", frame.prefix, stop);
                }
            }
        }

        Ok(())
    }

    /// Fetches one prefix, replaying through throttling up to the retry cap
    ///
    /// # Returns
    ///
    /// * `Ok(Some(results))` - The endpoint answered with a page
    /// * `Ok(None)` - Transport failure, the branch should be abandoned
    /// * `Err(SweepError::RetriesExhausted)` - Sustained throttling beyond
    ///   the configured cap
    async fn fetch_with_retry(&self, prefix: &str) -> Result<Option<Vec<String>>, SweepError> {
        let mut throttled_attempts = 0u32;

        loop {
            self.limiter.acquire().await;
            let outcome = self.fetcher.query(prefix).await;

            let calls = {
                let mut store = self.store.lock().unwrap();
                store.record_call();
                store.call_count()
            };

            if calls % 25 == 0 {
                let store = self.store.lock().unwrap();
                tracing::info!(
                    "Progress: {} calls, {} unique names",
                    calls,
                    store.count()
                );
            }

            match outcome {
                QueryOutcome::Page(results) => return Ok(Some(results)),

                QueryOutcome::Throttled => {
                    throttled_attempts += 1;
                    if throttled_attempts > self.config.crawl.max_retries {
                        return Err(SweepError::RetriesExhausted {
                            prefix: prefix.to_string(),
                            attempts: throttled_attempts,
                        });
                    }
                    tracing::warn!(
                        "Throttled on '{}' (attempt {}/{})",
                        prefix,
                        throttled_attempts,
                        self.config.crawl.max_retries
                    );
                    self.limiter.penalize().await;
                }

                QueryOutcome::TransportError(error) => {
                    tracing::warn!("Abandoning branch '{}': {}", prefix, error);
                    return Ok(None);
                }
            }
        }
    }

    /// Builds the report for everything collected so far
    pub fn report(&self) -> CrawlReport {
        let store = self.store.lock().unwrap();
        CrawlReport {
            unique_names: store.count(),
            total_calls: store.call_count(),
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }

    /// Returns a sorted copy of every name collected so far
    pub fn snapshot(&self) -> Vec<String> {
        self.store.lock().unwrap().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, ApiVersion, CrawlConfig, OutputConfig};

    fn create_test_config() -> Config {
        Config {
            api: ApiConfig {
                endpoint: "http://127.0.0.1:1/v1/autocomplete".to_string(),
                version: ApiVersion::V1,
                page_cap: None,
                rate_budget: None,
            },
            crawl: CrawlConfig {
                max_depth: 6,
                max_retries: 5,
                throttle_cooldown_secs: 60,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_coordinator_creation() {
        let coordinator = Coordinator::new(create_test_config()).unwrap();
        let report = coordinator.report();

        assert_eq!(report.unique_names, 0);
        assert_eq!(report.total_calls, 0);
        assert!(coordinator.snapshot().is_empty());
    }

    // The run loop itself is exercised end-to-end against mock servers in
    // tests/crawl_tests.rs
}
