//! Down-sampling of the record set at fixed day intervals

use crate::model::{DailyRecord, SampledSummaries, Summary};
use crate::stats::aggregate::Aggregator;
use std::num::NonZeroUsize;

/// Intervals of the exported resolutions, in days
///
/// None is a multiple of 7, so no resolution is pinned to one weekday.
pub const SAMPLING_INTERVALS: [usize; 4] = [1, 2, 4, 6];

/// Picks every `interval`-th record by ascending date, starting with the earliest
///
/// The input order is not trusted: a copy is sorted (stably) by date first.
/// Undated records sort before dated ones. The result holds
/// `ceil(len / interval)` records.
pub fn sample(records: &[DailyRecord], interval: NonZeroUsize) -> Vec<DailyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.date);
    sorted.into_iter().step_by(interval.get()).collect()
}

/// Label stamped on a sampled summary; the daily baseline has none
pub fn sampling_label(interval: NonZeroUsize) -> String {
    match interval.get() {
        1 => String::new(),
        n => format!("Every {} days from first day", n),
    }
}

/// Summarizes the records sampled at `interval`
///
/// Interval 1 summarizes the records as given, without resampling. An
/// empty record set gets no label.
pub fn sampled_summary(
    records: &[DailyRecord],
    interval: NonZeroUsize,
    aggregator: &Aggregator,
) -> Summary {
    let mut summary = if interval.get() == 1 {
        aggregator.summarize(records)
    } else {
        aggregator.summarize(&sample(records, interval))
    };
    if summary.record_count > 0 {
        summary.sampling_strategy_label = sampling_label(interval);
    }

    tracing::debug!(
        "Interval {}: {} of {} records",
        interval,
        summary.record_count,
        records.len()
    );
    summary
}

/// Builds the four exported resolutions
pub fn sampled_summaries(records: &[DailyRecord], aggregator: &Aggregator) -> SampledSummaries {
    let [every_day, every_2_days, every_4_days, every_6_days] = SAMPLING_INTERVALS.map(|k| {
        let interval = NonZeroUsize::new(k).unwrap_or(NonZeroUsize::MIN);
        sampled_summary(records, interval, aggregator)
    });

    SampledSummaries {
        every_day,
        every_2_days,
        every_4_days,
        every_6_days,
    }
}
