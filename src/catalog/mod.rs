//! Catalog module: fetching and parsing the day-archive listing
//!
//! This module contains the harvesting logic, including:
//! - Numeric and unit parsing of cell text
//! - Download link classification
//! - Row and page extraction
//! - HTTP fetching with explicit timeout and retry policy
//! - Sequential pagination

mod fetcher;
mod links;
mod page;
mod paginator;
mod row;
mod units;

pub use fetcher::{
    build_http_client, fetch_html, fetch_with_retry, page_url, HttpPageSource, PageSource,
    RetryPolicy,
};
pub use links::{extract_links, ArchiveLinks, LinkSelectors};
pub use page::{parse_page, CatalogPage};
pub use paginator::{append_page, fetch_page, harvest, pages, PaginatorState};
pub use row::{extract_row, RowSelectors};
pub use units::{normalize_spaces, parse_count, parse_sizes, ArchiveSizes};
