//! Record-set aggregation
//!
//! Sizes are summed in MB, then converted to TB with binary factors
//! (MB -> GB -> TB). Parquet estimates are fractions of the full CSV total.

use crate::config::EstimateConfig;
use crate::model::{format_date, DailyRecord, Summary};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Converts megabytes to terabytes (1024 MB per GB, 1024 GB per TB)
pub fn mb_to_tb(mb: f64) -> f64 {
    mb / 1024.0 / 1024.0
}

/// Running sums over a record set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub record_count: usize,
    pub total_statements: u64,
    pub full_csv_mb: f64,
    pub full_zip_mb: f64,
    pub light_csv_mb: f64,
    pub light_zip_mb: f64,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

impl Totals {
    /// Accumulates every record, in order
    pub fn accumulate(records: &[DailyRecord]) -> Self {
        records.iter().fold(Self::default(), Self::add)
    }

    /// Adds one record to the sums
    pub fn add(mut self, record: &DailyRecord) -> Self {
        self.record_count += 1;
        self.total_statements = self
            .total_statements
            .saturating_add(record.statement_count);
        self.full_csv_mb += record.full_csv_size_mb;
        self.full_zip_mb += record.full_zip_size_mb;
        self.light_csv_mb += record.light_csv_size_mb;
        self.light_zip_mb += record.light_zip_size_mb;

        if let Some(date) = record.date {
            self.earliest = Some(self.earliest.map_or(date, |d| d.min(date)));
            self.latest = Some(self.latest.map_or(date, |d| d.max(date)));
        }
        self
    }

    /// `"A to B"`, `"A"` when both ends match, `""` without any date
    pub fn date_range(&self) -> String {
        format_date_range(self.earliest, self.latest)
    }
}

/// Formats an inclusive date range
pub fn format_date_range(earliest: Option<NaiveDate>, latest: Option<NaiveDate>) -> String {
    match (earliest, latest) {
        (Some(a), Some(b)) if a == b => format_date(Some(a)),
        (Some(a), Some(b)) => format!("{} to {}", format_date(Some(a)), format_date(Some(b))),
        _ => String::new(),
    }
}

/// Summary timestamp: RFC 3339, UTC, whole seconds (`2024-01-31T12:00:00Z`)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Computes summaries with fixed Parquet reduction factors
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    estimates: EstimateConfig,
}

impl Aggregator {
    pub const fn new(estimates: EstimateConfig) -> Self {
        Self { estimates }
    }

    /// Summarizes `records`, stamped with the current instant
    ///
    /// Tier costs are left at zero; see [`crate::stats::CostProjector`].
    pub fn summarize(&self, records: &[DailyRecord]) -> Summary {
        self.summarize_at(records, Utc::now())
    }

    /// Summarizes `records`, stamped with `at`
    ///
    /// An empty slice gives zero totals and an empty date range.
    pub fn summarize_at(&self, records: &[DailyRecord], at: DateTime<Utc>) -> Summary {
        let totals = Totals::accumulate(records);

        let total_full_csv_size_tb = mb_to_tb(totals.full_csv_mb);

        Summary {
            record_count: totals.record_count,
            total_statements: totals.total_statements,
            total_full_csv_size_tb,
            total_full_zip_size_tb: mb_to_tb(totals.full_zip_mb),
            total_full_parquet_conservative_size_tb: total_full_csv_size_tb
                * self.estimates.parquet_conservative_factor,
            total_full_parquet_aggressive_size_tb: total_full_csv_size_tb
                * self.estimates.parquet_aggressive_factor,
            date_range: totals.date_range(),
            sampled_at_timestamp: format_timestamp(at),
            ..Summary::default()
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(EstimateConfig::default())
    }
}
