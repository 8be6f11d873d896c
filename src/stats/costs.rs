//! Storage-tier cost projection

use crate::config::{PricingConfig, TierConfig};
use crate::model::{SampledSummaries, StorageCosts, Summary};

/// Gigabytes per terabyte, decimal as in cloud storage billing
pub const GB_PER_TB: f64 = 1000.0;

/// Monthly cost of storing `size_tb` at `price_per_gb`
pub fn storage_cost(size_tb: f64, price_per_gb: f64) -> f64 {
    size_tb * GB_PER_TB * price_per_gb
}

/// Costs every size of a summary at one tier's per-GB price
///
/// Pure and linear in the price.
pub fn project_costs(summary: &Summary, price_per_gb: f64) -> StorageCosts {
    StorageCosts {
        full_csv_cost: storage_cost(summary.total_full_csv_size_tb, price_per_gb),
        full_zip_cost: storage_cost(summary.total_full_zip_size_tb, price_per_gb),
        parquet_conservative_cost: storage_cost(
            summary.total_full_parquet_conservative_size_tb,
            price_per_gb,
        ),
        parquet_aggressive_cost: storage_cost(
            summary.total_full_parquet_aggressive_size_tb,
            price_per_gb,
        ),
    }
}

/// Attaches standard and deep-archive costs to summaries
#[derive(Debug, Clone)]
pub struct CostProjector {
    standard: TierConfig,
    deep_archive: TierConfig,
}

impl CostProjector {
    pub fn new(pricing: &PricingConfig) -> Self {
        Self {
            standard: pricing.standard.clone(),
            deep_archive: pricing.deep_archive.clone(),
        }
    }

    pub fn standard(&self) -> &TierConfig {
        &self.standard
    }

    pub fn deep_archive(&self) -> &TierConfig {
        &self.deep_archive
    }

    /// Returns the summary with both tier breakdowns filled in
    pub fn apply(&self, mut summary: Summary) -> Summary {
        summary.standard_tier_costs = project_costs(&summary, self.standard.price_per_gb);
        summary.deep_archive_tier_costs = project_costs(&summary, self.deep_archive.price_per_gb);
        summary
    }

    /// Applies [`CostProjector::apply`] to every resolution
    pub fn apply_all(&self, summaries: SampledSummaries) -> SampledSummaries {
        SampledSummaries {
            every_day: self.apply(summaries.every_day),
            every_2_days: self.apply(summaries.every_2_days),
            every_4_days: self.apply(summaries.every_4_days),
            every_6_days: self.apply(summaries.every_6_days),
        }
    }
}
