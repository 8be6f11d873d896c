//! Catalog page parsing
//!
//! A page contributes every `tr.dayarchive-row` in document order, plus a
//! flag telling whether the pager offers a following page.

use crate::catalog::links::parse_selector;
use crate::catalog::row::{extract_row, RowSelectors};
use crate::model::DailyRecord;
use crate::{PageError, PageResult};
use scraper::Html;

/// Marker class of the day-archive rows
const ROW_SELECTOR: &str = "tr.dayarchive-row";

/// Either affordance is enough to continue paginating
const NEXT_PAGE_SELECTORS: [&str; 2] = ["a[aria-label='Next page']", ".ecl-pagination__item--next"];

/// Records extracted from one catalog page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    /// Records in document order
    pub records: Vec<DailyRecord>,

    /// Whether the page links to a following page
    pub has_more: bool,
}

/// Parses a catalog page
///
/// # Returns
///
/// * `Ok(CatalogPage)` - Rows and pagination state of the page
/// * `Err(PageError::Markup)` - The body is empty or a selector is invalid
///
/// # Example
///
/// ```
/// use dsa_harvest::catalog::parse_page;
///
/// let html = r#"<table><tr class="dayarchive-row"><td>2023-09-25</td><td>12</td></tr></table>"#;
/// let page = parse_page(html).unwrap();
/// assert_eq!(page.records.len(), 1);
/// assert!(!page.has_more);
/// ```
pub fn parse_page(html: &str) -> PageResult<CatalogPage> {
    if html.trim().is_empty() {
        return Err(PageError::Markup("empty document".to_string()));
    }

    let document = Html::parse_document(html);

    let row_selector = parse_selector(ROW_SELECTOR).map_err(PageError::Markup)?;
    let selectors = RowSelectors::new().map_err(PageError::Markup)?;

    let records: Vec<DailyRecord> = document
        .select(&row_selector)
        .map(|row| extract_row(row, &selectors))
        .collect();

    let has_more = has_next_page(&document)?;

    tracing::debug!("Parsed {} rows (has_more: {})", records.len(), has_more);

    Ok(CatalogPage { records, has_more })
}

fn has_next_page(document: &Html) -> PageResult<bool> {
    for css in NEXT_PAGE_SELECTORS {
        let selector = parse_selector(css).map_err(PageError::Markup)?;
        if document.select(&selector).next().is_some() {
            return Ok(true);
        }
    }
    Ok(false)
}
