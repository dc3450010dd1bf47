//! Output module for sweep reports
//!
//! This module handles:
//! - Building the end-of-run summary
//! - Printing the summary to stdout
//! - Exporting the collected names to a file

mod report;

pub use report::{export_names, print_report, CrawlReport};
