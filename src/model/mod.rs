//! Entity types shared by the harvest and statistics stages
//!
//! # Components
//!
//! - `DailyRecord`: one day's catalog entry (sizes and links of both archive variants)
//! - `Summary` / `StorageCosts`: aggregate view over a record set and its tier costs
//! - `SampledSummaries` / `DataExport`: the exported document

mod record;
mod summary;

pub use record::{format_date, parse_date, DailyRecord, DATE_FORMAT};
pub use summary::{DataExport, SampledSummaries, StorageCosts, Summary};
