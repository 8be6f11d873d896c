//! Summary and export document types
//!
//! A `Summary` is computed per sampling resolution and carries one
//! `StorageCosts` breakdown per storage tier.

use crate::model::DailyRecord;
use serde::{Deserialize, Serialize};

/// Aggregate view over a set of daily records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records aggregated
    pub record_count: usize,

    /// Sum of statement counts
    pub total_statements: u64,

    /// Full-variant decompressed size, in TB
    pub total_full_csv_size_tb: f64,

    /// Full-variant compressed size, in TB
    pub total_full_zip_size_tb: f64,

    /// Estimated Parquet size under the conservative factor, in TB
    pub total_full_parquet_conservative_size_tb: f64,

    /// Estimated Parquet size under the aggressive factor, in TB
    pub total_full_parquet_aggressive_size_tb: f64,

    /// `"A to B"`, or just `"A"` when both ends are the same day
    pub date_range: String,

    /// When the summary was computed (RFC 3339, UTC)
    pub sampled_at_timestamp: String,

    /// Sampling interval description; empty for the full-resolution summary
    pub sampling_strategy_label: String,

    pub standard_tier_costs: StorageCosts,
    pub deep_archive_tier_costs: StorageCosts,
}

/// Monthly storage cost of a summary's sizes at one tier, in USD
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageCosts {
    pub full_csv_cost: f64,
    pub full_zip_cost: f64,
    pub parquet_conservative_cost: f64,
    pub parquet_aggressive_cost: f64,
}

/// The four resolutions every export carries
///
/// Intervals are not multiples of 7, so a sampled subset does not keep
/// landing on the same weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledSummaries {
    pub every_day: Summary,
    pub every_2_days: Summary,
    pub every_4_days: Summary,
    pub every_6_days: Summary,
}

impl SampledSummaries {
    /// Summaries paired with their sampling interval, finest first
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Summary)> {
        [
            (1, &self.every_day),
            (2, &self.every_2_days),
            (4, &self.every_4_days),
            (6, &self.every_6_days),
        ]
        .into_iter()
    }
}

/// The document handed to the archive download pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataExport {
    pub summaries: SampledSummaries,
    pub records: Vec<DailyRecord>,
}
