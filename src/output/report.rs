//! Final sweep report
//!
//! This module builds and prints the end-of-run summary and optionally
//! exports the collected names to a file.

use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Summary of one completed (or aborted) sweep
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Number of unique names collected
    pub unique_names: usize,

    /// Total external calls made, throttle replays included
    pub total_calls: u64,

    /// When the sweep started
    pub started_at: DateTime<Utc>,

    /// When the report was taken
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Wall-clock duration of the sweep in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Prints the report to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The report to display
pub fn print_report(report: &CrawlReport) {
    println!("=== Sweep Report ===\n");

    println!("Total unique names: {}", report.unique_names);
    println!("Total API calls: {}", report.total_calls);
    println!(
        "Duration: {}s (started {})",
        report.duration_seconds(),
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if report.total_calls > 0 {
        let yield_per_call = report.unique_names as f64 / report.total_calls as f64;
        println!("Names per call: {:.2}", yield_per_call);
    }
}

/// Writes the sorted name listing to a file, one name per line
///
/// # Arguments
///
/// * `names` - The sorted names to export
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Names written
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn export_names(names: &[String], path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for name in names {
        writeln!(file, "{}", name)?;
    }
    file.flush()?;

    tracing::info!("Exported {} names to {}", names.len(), path.display());
    Ok(())
}
