//! Statistics over a harvested record set
//!
//! Everything here is pure: no I/O, no shared state. The stages are
//! - aggregation of a record set into a `Summary`
//! - down-sampling at fixed day intervals
//! - storage-tier cost projection

pub mod aggregate;
pub mod costs;
pub mod sampler;

pub use aggregate::{format_date_range, format_timestamp, mb_to_tb, Aggregator, Totals};
pub use costs::{project_costs, storage_cost, CostProjector, GB_PER_TB};
pub use sampler::{sample, sampled_summaries, sampled_summary, sampling_label, SAMPLING_INTERVALS};
