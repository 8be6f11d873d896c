//! Export assembly and JSON output
//!
//! Assembly itself cannot fail: any error comes from the harvest (before) or
//! from writing the file (after).

use crate::catalog::{harvest, PageSource};
use crate::config::{Config, OutputConfig};
use crate::model::{DailyRecord, DataExport};
use crate::stats::{sampled_summaries, Aggregator, CostProjector};
use crate::HarvestError;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timestamp format of export file names
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Builds the export document from already harvested records
///
/// Samples the records at every interval, then costs each summary at both
/// storage tiers. The records are moved into the export unchanged.
pub fn build_export(records: Vec<DailyRecord>, config: &Config) -> DataExport {
    let aggregator = Aggregator::new(config.estimates);
    let projector = CostProjector::new(&config.pricing);

    let summaries = projector.apply_all(sampled_summaries(&records, &aggregator));

    DataExport { summaries, records }
}

/// Harvests `source` and builds the export document
///
/// Harvest failures are returned unchanged.
pub async fn assemble_export<S>(source: &S, config: &Config) -> Result<DataExport, HarvestError>
where
    S: PageSource + ?Sized,
{
    let delay = Duration::from_millis(config.source.inter_page_delay_ms);
    let records = harvest(source, delay).await?;
    Ok(build_export(records, config))
}

/// `<prefix>_<YYYY-MM-DD_HH-MM-SS>.json`
pub fn export_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.json", prefix, at.format(FILE_TIMESTAMP_FORMAT))
}

/// Writes the export as pretty-printed JSON
///
/// The output directory is created when missing.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(HarvestError)` - Encoding or writing failed
pub fn write_export(
    export: &DataExport,
    output: &OutputConfig,
    at: NaiveDateTime,
) -> Result<PathBuf, HarvestError> {
    let directory = Path::new(&output.directory);
    std::fs::create_dir_all(directory)?;

    let path = directory.join(export_file_name(&output.file_prefix, at));
    let json = serde_json::to_vec_pretty(export)?;
    std::fs::write(&path, json)?;

    tracing::info!(
        "Wrote {} records to {}",
        export.records.len(),
        path.display()
    );
    Ok(path)
}
