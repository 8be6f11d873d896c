//! Day-archive row extraction
//!
//! Column layout (zero-indexed):
//!
//! | # | Content |
//! |---|---------|
//! | 0 | date |
//! | 1 | statement count |
//! | 2 | full variant links |
//! | 3 | full variant sizes |
//! | 4 | light variant links |
//! | 5 | light variant sizes |
//!
//! Missing trailing cells read as empty, so a short row still yields a record.

use crate::catalog::links::{extract_links, parse_selector, ArchiveLinks, LinkSelectors};
use crate::catalog::units::{parse_count, parse_sizes};
use crate::model::{parse_date, DailyRecord};
use scraper::{ElementRef, Selector};

const DATE_COLUMN: usize = 0;
const STATEMENTS_COLUMN: usize = 1;
const FULL_LINKS_COLUMN: usize = 2;
const FULL_SIZES_COLUMN: usize = 3;
const LIGHT_LINKS_COLUMN: usize = 4;
const LIGHT_SIZES_COLUMN: usize = 5;

/// Selectors needed to read a row
#[derive(Debug)]
pub struct RowSelectors {
    cell: Selector,
    links: LinkSelectors,
}

impl RowSelectors {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            cell: parse_selector("td")?,
            links: LinkSelectors::new()?,
        })
    }
}

/// Builds one record from a table row
///
/// Never fails: unreadable fields fall back to zero or empty values.
pub fn extract_row(row: ElementRef<'_>, selectors: &RowSelectors) -> DailyRecord {
    let cells: Vec<ElementRef<'_>> = row.select(&selectors.cell).collect();

    let text_of = |index: usize| -> String {
        cells
            .get(index)
            .map(|cell| cell.text().collect())
            .unwrap_or_default()
    };
    let links_of = |index: usize| -> ArchiveLinks {
        cells
            .get(index)
            .map(|cell| extract_links(*cell, &selectors.links))
            .unwrap_or_default()
    };

    let date_text = text_of(DATE_COLUMN);
    let date = parse_date(&date_text);
    if date.is_none() {
        tracing::debug!("Unparsable date cell '{}'", date_text.trim());
    }

    let full_links = links_of(FULL_LINKS_COLUMN);
    let full_sizes = parse_sizes(&text_of(FULL_SIZES_COLUMN));
    let light_links = links_of(LIGHT_LINKS_COLUMN);
    let light_sizes = parse_sizes(&text_of(LIGHT_SIZES_COLUMN));

    DailyRecord {
        date,
        statement_count: parse_count(&text_of(STATEMENTS_COLUMN)),
        full_csv_size_mb: full_sizes.csv_mb,
        full_zip_size_mb: full_sizes.zip_mb,
        full_zip_url: full_links.archive_url,
        full_sha1_url: full_links.checksum_url,
        light_csv_size_mb: light_sizes.csv_mb,
        light_zip_size_mb: light_sizes.zip_mb,
        light_zip_url: light_links.archive_url,
        light_sha1_url: light_links.checksum_url,
    }
}
