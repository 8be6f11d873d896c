//! Console report of an export
//!
//! Mirrors the JSON summaries in a form meant for the operator: one block
//! per resolution, counts with thousands separators, sizes in TB and tier
//! costs in USD per month.

use crate::model::{DataExport, Summary};
use crate::stats::{mb_to_tb, CostProjector, Totals};

/// Formats an integer with `,` thousands separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

/// Renders the report
pub fn format_report(export: &DataExport, projector: &CostProjector) -> String {
    let mut out = String::new();

    out.push_str("=== DSA Catalog Summary ===\n\n");

    for (interval, summary) in export.summaries.iter() {
        match interval {
            1 => out.push_str("Every day:\n"),
            n => out.push_str(&format!("Every {} days:\n", n)),
        }
        write_summary(&mut out, summary, projector);
        out.push('\n');
    }

    // Light variant
    let totals = Totals::accumulate(&export.records);
    out.push_str("Light variant (all records):\n");
    out.push_str(&format!("  CSV: {:.3} TB\n", mb_to_tb(totals.light_csv_mb)));
    out.push_str(&format!("  ZIP: {:.3} TB\n", mb_to_tb(totals.light_zip_mb)));

    out
}

fn write_summary(out: &mut String, summary: &Summary, projector: &CostProjector) {
    out.push_str(&format!(
        "  Records: {}\n",
        format_number(summary.record_count as u64)
    ));
    out.push_str(&format!(
        "  Statements: {}\n",
        format_number(summary.total_statements)
    ));
    if !summary.date_range.is_empty() {
        out.push_str(&format!("  Date range: {}\n", summary.date_range));
    }
    out.push_str(&format!(
        "  Full CSV: {:.3} TB, ZIP: {:.3} TB\n",
        summary.total_full_csv_size_tb, summary.total_full_zip_size_tb
    ));
    out.push_str(&format!(
        "  Parquet estimate: {:.3} TB (conservative), {:.3} TB (aggressive)\n",
        summary.total_full_parquet_conservative_size_tb,
        summary.total_full_parquet_aggressive_size_tb
    ));

    for (label, costs) in [
        (&projector.standard().label, &summary.standard_tier_costs),
        (&projector.deep_archive().label, &summary.deep_archive_tier_costs),
    ] {
        out.push_str(&format!(
            "  {}: CSV ${:.2}, ZIP ${:.2}, Parquet ${:.2}-${:.2} /month\n",
            label,
            costs.full_csv_cost,
            costs.full_zip_cost,
            costs.parquet_aggressive_cost,
            costs.parquet_conservative_cost
        ));
    }
}

/// Prints the report to stdout
pub fn print_report(export: &DataExport, projector: &CostProjector) {
    print!("{}", format_report(export, projector));
}
