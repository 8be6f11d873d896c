//! Numeric parsing for catalog cell text
//!
//! The portal renders counts with (non-breaking) spaces as thousands separators
//! and sizes as `csv: 1.5 GB zip: 250 MB`. None of this formatting is
//! guaranteed stable, so anything that does not parse resolves to zero: an
//! absent size simply means the archive is not published yet.

use regex::Regex;
use std::sync::OnceLock;

const NO_BREAK_SPACE: char = '\u{00A0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// Megabytes per gigabyte, binary convention used by the portal
const MB_PER_GB: f64 = 1024.0;

/// Decompressed and compressed size of one archive variant, in MB
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArchiveSizes {
    pub csv_mb: f64,
    pub zip_mb: f64,
}

/// Replaces the no-break space variants with ordinary spaces
pub fn normalize_spaces(text: &str) -> String {
    text.replace([NO_BREAK_SPACE, NARROW_NO_BREAK_SPACE], " ")
}

/// Parses an integer count such as `"1 234 567"`
///
/// Unparsable text yields 0.
pub fn parse_count(text: &str) -> u64 {
    let digits: String = normalize_spaces(text)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    match digits.parse::<u64>() {
        Ok(count) => count,
        Err(_) => {
            if !digits.is_empty() {
                tracing::debug!("Unparsable count '{}', using 0", text.trim());
            }
            0
        }
    }
}

/// Extracts the `csv:` and `zip:` sizes from a size cell
///
/// Units are `MB` or `GB` (case-sensitive) and are matched independently for
/// each label. GB values are converted to MB. A missing or unparsable size
/// is 0.
pub fn parse_sizes(text: &str) -> ArchiveSizes {
    let text = normalize_spaces(text);

    ArchiveSizes {
        csv_mb: labelled_size(csv_pattern(), &text),
        zip_mb: labelled_size(zip_pattern(), &text),
    }
}

fn csv_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| size_pattern("csv")).as_ref()
}

fn zip_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| size_pattern("zip")).as_ref()
}

/// `<label>: <ASCII digits, possibly space-grouped>[.<fraction>] <MB|GB>`
fn size_pattern(label: &str) -> Option<Regex> {
    Regex::new(&format!(r"{}:\s*([0-9][0-9 ]*(?:\.[0-9]+)?)\s*(MB|GB)", label)).ok()
}

fn labelled_size(pattern: Option<&Regex>, text: &str) -> f64 {
    let Some(captures) = pattern.and_then(|p| p.captures(text)) else {
        return 0.0;
    };

    let number: String = captures[1].chars().filter(|c| *c != ' ').collect();
    let value = match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::debug!("Unparsable size '{}', using 0", &captures[0]);
            return 0.0;
        }
    };

    match &captures[2] {
        "GB" => value * MB_PER_GB,
        _ => value,
    }
}
