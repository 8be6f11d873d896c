//! DSA Harvest main entry point
//!
//! This is the command-line interface for the DSA catalog harvester.

use clap::Parser;
use dsa_harvest::config::{load_config_with_hash, override_output_directory, Config};
use dsa_harvest::output::{print_report, run_export};
use dsa_harvest::stats::CostProjector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// DSA Harvest: daily-archive catalog harvester
///
/// Walks the DSA transparency database download catalog, extracts one record
/// per day, and writes a JSON export with sampled summaries and storage cost
/// projections.
#[derive(Parser, Debug)]
#[command(name = "dsa-harvest")]
#[command(version)]
#[command(about = "DSA daily-archive catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the JSON export, overriding the configuration
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(dir) = &cli.output_dir {
        if let Err(e) = override_output_directory(&mut config, &dir.display().to_string()) {
            tracing::error!("Invalid --output-dir: {}", e);
            return Err(e.into());
        }
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dsa_harvest=info,warn"),
            1 => EnvFilter::new("dsa_harvest=debug,info"),
            2 => EnvFilter::new("dsa_harvest=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== DSA Harvest Dry Run ===\n");

    println!("Source:");
    println!("  Catalog: {}", config.source.base_url);
    println!("  Page parameter: {}", config.source.page_param);
    println!("  Inter-page delay: {}ms", config.source.inter_page_delay_ms);
    println!(
        "  Timeouts: {}s request, {}s connect",
        config.source.request_timeout_secs, config.source.connect_timeout_secs
    );
    println!(
        "  Retries: {} (delay {}ms)",
        config.source.max_retries, config.source.retry_delay_ms
    );

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nEstimates:");
    println!(
        "  Parquet factors: {} (conservative), {} (aggressive)",
        config.estimates.parquet_conservative_factor, config.estimates.parquet_aggressive_factor
    );

    println!("\nPricing:");
    for tier in [&config.pricing.standard, &config.pricing.deep_archive] {
        println!("  {}: {} USD/GB", tier.label, tier.price_per_gb);
    }

    println!("\nOutput:");
    println!(
        "  {}/{}_<timestamp>.json",
        config.output.directory, config.output.file_prefix
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    match run_export(config).await {
        Ok((export, path)) => {
            if !quiet {
                print_report(&export, &CostProjector::new(&config.pricing));
                println!("\nData exported to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
