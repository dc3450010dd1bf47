//! Crawler module for exhaustive prefix expansion
//!
//! This module contains the core sweep logic, including:
//! - HTTP querying and outcome classification
//! - Call-rate pacing and throttle recovery
//! - Page evaluation and child prefix generation
//! - Overall sweep coordination

mod coordinator;
mod expander;
mod fetcher;
mod limiter;

pub use coordinator::Coordinator;
pub use expander::{child_prefixes, evaluate_page, PageDecision};
pub use fetcher::{build_http_client, Fetcher, QueryOutcome};
pub use limiter::RateLimiter;

use crate::config::Config;
use crate::output::CrawlReport;
use crate::SweepError;

/// Runs a complete sweep and returns its report
///
/// This is the main library entry point for running a sweep. It seeds one
/// branch per first-level symbol, works every branch to exhaustion, and
/// reports the final unique-name and call counts.
///
/// # Arguments
///
/// * `config` - The validated sweep configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Sweep completed
/// * `Err(SweepError)` - Sweep aborted (sustained throttling or setup failure)
pub async fn sweep(config: Config) -> Result<CrawlReport, SweepError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await?;
    Ok(coordinator.report())
}
