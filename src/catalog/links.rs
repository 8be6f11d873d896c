//! Download link extraction from a catalog cell
//!
//! Each variant cell holds anchors labelled `zip` (the archive) and `sha1`
//! (its checksum). The label normally sits in an inner `.ecl-link__label`
//! span; plain anchors fall back to their own text.

use scraper::{ElementRef, Selector};

const ARCHIVE_LABEL: &str = "zip";
const CHECKSUM_LABEL: &str = "sha1";

/// Archive and checksum URLs of one variant; empty when not published
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveLinks {
    pub archive_url: String,
    pub checksum_url: String,
}

/// Selectors used while scanning a cell, built once per page
#[derive(Debug)]
pub struct LinkSelectors {
    anchor: Selector,
    label: Selector,
}

impl LinkSelectors {
    /// Builds the anchor and label selectors
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            anchor: parse_selector("a")?,
            label: parse_selector(".ecl-link__label")?,
        })
    }
}

pub(crate) fn parse_selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {:?}", css, e))
}

/// Classifies the anchors of a cell by label text
///
/// Labels must equal `zip` or `sha1` exactly (after trimming). Anchors with
/// other labels or without `href` are ignored. When a label occurs more than
/// once, the last anchor in document order wins.
pub fn extract_links(cell: ElementRef<'_>, selectors: &LinkSelectors) -> ArchiveLinks {
    let mut links = ArchiveLinks::default();

    for anchor in cell.select(&selectors.anchor) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        match link_label(anchor, selectors).as_str() {
            ARCHIVE_LABEL => links.archive_url = href.to_string(),
            CHECKSUM_LABEL => links.checksum_url = href.to_string(),
            _ => {}
        }
    }

    links
}

fn link_label(anchor: ElementRef<'_>, selectors: &LinkSelectors) -> String {
    let text: String = match anchor.select(&selectors.label).next() {
        Some(label) => label.text().collect(),
        None => anchor.text().collect(),
    };
    text.trim().to_string()
}
