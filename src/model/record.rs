//! Daily catalog record definitions
//!
//! One `DailyRecord` is built per `dayarchive-row` in the catalog table and is
//! never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format of catalog dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One calendar day's catalog entry
///
/// The date is kept as a calendar type so ordering never depends on how the
/// portal pads its text; it is formatted as `YYYY-MM-DD` only when serialized.
/// A cell that does not hold a date leaves it as `None` (serialized as `""`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(with = "date_serde")]
    pub date: Option<NaiveDate>,
    pub statement_count: u64,
    pub full_csv_size_mb: f64,
    pub full_zip_size_mb: f64,
    pub full_zip_url: String,
    pub full_sha1_url: String,
    pub light_csv_size_mb: f64,
    pub light_zip_size_mb: f64,
    pub light_zip_url: String,
    pub light_sha1_url: String,
}

impl DailyRecord {
    /// Returns the date in its `YYYY-MM-DD` wire form, or an empty string
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }
}

/// Formats an optional date the way it appears in the export
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parses a catalog date cell
///
/// Surrounding whitespace is ignored and unpadded month/day numbers are
/// accepted. Anything else is `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

mod date_serde {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let text = String::deserialize(d)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        parse_date(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", text)))
    }
}
