//! Output module for assembling and writing the export
//!
//! This module handles:
//! - Assembling the sampled, costed summaries and the record list
//! - Writing the timestamped JSON export
//! - Printing a human-readable report

mod export;
pub mod report;

pub use export::{assemble_export, build_export, export_file_name, write_export};
pub use report::{format_number, format_report, print_report};

use crate::catalog::HttpPageSource;
use crate::config::Config;
use crate::model::DataExport;
use crate::HarvestError;
use chrono::Local;
use std::path::PathBuf;

/// Runs a complete harvest and writes its export
///
/// This is the main entry point. It will:
/// 1. Build the HTTP page source
/// 2. Walk the catalog from page 1
/// 3. Summarize at every sampling interval and cost both tiers
/// 4. Write the JSON export
///
/// Nothing is written when the harvest fails.
///
/// # Returns
///
/// * `Ok((DataExport, PathBuf))` - The export and the file it was written to
/// * `Err(HarvestError)` - Harvest or write failed
pub async fn run_export(config: &Config) -> Result<(DataExport, PathBuf), HarvestError> {
    let source = HttpPageSource::from_config(&config.source, &config.user_agent)?;
    tracing::info!("Harvesting catalog at {}", config.source.base_url);

    let export = assemble_export(&source, config).await?;
    let path = write_export(&export, &config.output, Local::now().naive_local())?;

    Ok((export, path))
}
