//! Namesweep main entry point
//!
//! This is the command-line interface for the Namesweep autocomplete harvester.

use anyhow::Context;
use clap::Parser;
use namesweep::config::load_config;
use namesweep::crawler::Coordinator;
use namesweep::output::{export_names, print_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Namesweep: an exhaustive autocomplete harvester
///
/// Namesweep enumerates every name reachable through a capped autocomplete
/// endpoint by expanding query prefixes depth-first, while staying within
/// the endpoint's call-rate budget.
#[derive(Parser, Debug)]
#[command(name = "namesweep")]
#[command(version = "1.0.0")]
#[command(about = "An exhaustive autocomplete harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be swept without issuing calls
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_sweep(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("namesweep=info,warn"),
            1 => EnvFilter::new("namesweep=debug,info"),
            2 => EnvFilter::new("namesweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the effective sweep
fn handle_dry_run(config: &namesweep::config::Config) {
    let alphabet = config.api.version.alphabet();

    println!("=== Namesweep Dry Run ===\n");

    println!("Endpoint:");
    println!("  URL: {}", config.api.endpoint);
    println!("  API version: {:?}", config.api.version);
    println!("  Page cap: {}", config.api.effective_page_cap());
    println!(
        "  Rate budget: {} calls/minute",
        config.api.effective_rate_budget()
    );

    println!("\nSweep:");
    println!("  Alphabet: {:?} ({} symbols)", alphabet, alphabet.len());
    println!("  Seed branches: {}", alphabet.seed_symbols().len());
    println!("  Max depth: {}", config.crawl.max_depth);
    println!("  Max throttle retries: {}", config.crawl.max_retries);
    println!(
        "  Throttle cooldown: {}s",
        config.crawl.throttle_cooldown_secs
    );

    println!("\nOutput:");
    match &config.output.names_path {
        Some(path) => println!("  Name listing: {}", path),
        None => println!("  Name listing: (not exported)"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main sweep operation
///
/// The report is printed even when the sweep aborts: partial failure never
/// discards already-collected names.
async fn handle_sweep(config: namesweep::config::Config) -> anyhow::Result<()> {
    let names_path = config.output.names_path.clone();

    let mut coordinator = Coordinator::new(config).context("Failed to initialize sweep")?;
    let outcome = coordinator.run().await;

    if let Err(e) = &outcome {
        tracing::error!("Sweep aborted: {}", e);
    }

    let report = coordinator.report();
    print_report(&report);

    if let Some(path) = names_path {
        let names = coordinator.snapshot();
        export_names(&names, std::path::Path::new(&path))
            .with_context(|| format!("Failed to export names to {}", path))?;
    }

    outcome.map_err(Into::into)
}
