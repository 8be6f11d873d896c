//! Sequential catalog pagination
//!
//! The walk is a small state machine:
//!
//! ```text
//! Fetching(1) -> Parsed(1, has_more) -> Fetching(2) -> ... -> Parsed(n, false) -> Done
//! ```
//!
//! [`pages`] exposes the walk as a lazy stream of parsed pages, and
//! [`harvest`] folds that stream into one ordered record list. Any fetch or
//! parse failure ends the stream with an error carrying the page number;
//! nothing is retried here.

use crate::catalog::fetcher::PageSource;
use crate::catalog::page::{parse_page, CatalogPage};
use crate::model::DailyRecord;
use crate::{HarvestError, PageResult};
use futures::stream::{self, Stream, TryStreamExt};
use std::time::Duration;

/// Position of the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// Page `page` is about to be requested
    Fetching { page: u32 },

    /// Page `page` was parsed; `has_more` reports the next-page affordance
    Parsed { page: u32, has_more: bool },

    /// No page left to fetch
    Done,
}

impl PaginatorState {
    /// Initial state: page 1
    pub const fn start() -> Self {
        Self::Fetching { page: 1 }
    }

    /// Moves past a parsed page; other states are unchanged
    pub const fn advance(self) -> Self {
        match self {
            Self::Parsed {
                page,
                has_more: true,
            } => Self::Fetching { page: page + 1 },
            Self::Parsed {
                has_more: false, ..
            } => Self::Done,
            other => other,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Fetches and parses one page
pub async fn fetch_page<S>(source: &S, page: u32) -> PageResult<CatalogPage>
where
    S: PageSource + ?Sized,
{
    let body = source.fetch_page(page).await?;
    parse_page(&body)
}

/// Lazily walks the catalog from page 1
///
/// Pages are fetched one at a time; `delay` is slept before every page after
/// the first. The stream ends after the first page without a next-page
/// affordance, or right after the first error.
pub fn pages<'a, S>(
    source: &'a S,
    delay: Duration,
) -> impl Stream<Item = Result<CatalogPage, HarvestError>> + 'a
where
    S: PageSource + ?Sized,
{
    stream::try_unfold(PaginatorState::start(), move |mut state| async move {
        loop {
            match state {
                PaginatorState::Done => return Ok(None),
                PaginatorState::Parsed { .. } => {
                    state = state.advance();
                    if !state.is_done() {
                        tokio::time::sleep(delay).await;
                    }
                }
                PaginatorState::Fetching { page } => {
                    tracing::info!("Scraping page {}", page);
                    return match fetch_page(source, page).await {
                        Ok(catalog_page) => {
                            tracing::debug!(
                                "Page {}: {} records",
                                page,
                                catalog_page.records.len()
                            );
                            let next = PaginatorState::Parsed {
                                page,
                                has_more: catalog_page.has_more,
                            };
                            Ok(Some((catalog_page, next)))
                        }
                        Err(source) => Err(HarvestError::Page { page, source }),
                    };
                }
            }
        }
    })
}

/// Appends a page's records, preserving page then document order
pub fn append_page(mut records: Vec<DailyRecord>, page: CatalogPage) -> Vec<DailyRecord> {
    records.extend(page.records);
    records
}

/// Harvests every record of the catalog
///
/// Records are not deduplicated: a date repeated by the source appears
/// repeatedly in the result.
pub async fn harvest<S>(source: &S, delay: Duration) -> Result<Vec<DailyRecord>, HarvestError>
where
    S: PageSource + ?Sized,
{
    let records = pages(source, delay)
        .try_fold(Vec::new(), |records, page| async move {
            Ok::<_, HarvestError>(append_page(records, page))
        })
        .await?;

    tracing::info!("Harvested {} records", records.len());
    Ok(records)
}
