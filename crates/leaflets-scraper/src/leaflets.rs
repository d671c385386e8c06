//! Leaflet extraction from a shop's brochure grid.
//!
//! Each `.brochure-thumb` element is one candidate leaflet. Expired ones
//! carry a `.grid-item-old` marker and are skipped outright. Every other
//! candidate either becomes a [`LeafletRecord`] or yields a [`ParseError`];
//! errors are logged per item and never abort the page.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use leaflets_core::LeafletRecord;
use scraper::{ElementRef, Html, Selector};

use crate::dates::parse_validity;
use crate::ParseError;

static BROCHURE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".brochure-thumb").expect("valid brochure selector"));
static STALE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".grid-item-old").expect("valid stale selector"));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".grid-item-content strong").expect("valid title selector")
});
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid image selector"));
static DATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".hidden-sm").expect("valid date selector"));

/// Parses every current leaflet on a shop page, in page order.
///
/// Stale items are dropped silently. Malformed items are logged at `warn`
/// with their position on the page and dropped; the remaining items are
/// still processed.
#[must_use]
pub fn parse_shop_page(html: &str, shop_name: &str) -> Vec<LeafletRecord> {
    let document = Html::parse_document(html);
    let mut leaflets = Vec::new();

    for (index, item) in document.select(&BROCHURE_SELECTOR).enumerate() {
        match parse_leaflet_item(item, shop_name) {
            Ok(Some(record)) => leaflets.push(record),
            Ok(None) => tracing::trace!(shop = shop_name, index, "skipping stale leaflet"),
            Err(e) => tracing::warn!(
                shop = shop_name,
                index,
                error = %e,
                "error parsing item"
            ),
        }
    }

    leaflets
}

/// Parses one brochure element, stamping it with the current local time.
///
/// Returns `Ok(None)` for items flagged as expired.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first required piece that is missing
/// or malformed.
pub fn parse_leaflet_item(
    item: ElementRef<'_>,
    shop_name: &str,
) -> Result<Option<LeafletRecord>, ParseError> {
    parse_leaflet_item_at(item, shop_name, chrono::Local::now().naive_local())
}

pub(crate) fn parse_leaflet_item_at(
    item: ElementRef<'_>,
    shop_name: &str,
    parsed_time: NaiveDateTime,
) -> Result<Option<LeafletRecord>, ParseError> {
    if item.select(&STALE_SELECTOR).next().is_some() {
        return Ok(None);
    }

    let title = first_text(item, &TITLE_SELECTOR).ok_or(ParseError::MissingTitle)?;
    let thumbnail = thumbnail_of(item)?;
    let date_text = first_text(item, &DATE_SELECTOR).ok_or(ParseError::MissingDateText)?;
    let validity = parse_validity(&date_text)?;

    let record = LeafletRecord::new(
        title,
        thumbnail,
        shop_name,
        validity.from,
        validity.to,
        parsed_time,
    )?;
    Ok(Some(record))
}

/// Trimmed text content of the first descendant matching `selector`.
fn first_text(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Image URL of the first `<img>`, preferring `src` over the lazy-load
/// `data-src`.
fn thumbnail_of(item: ElementRef<'_>) -> Result<String, ParseError> {
    let img = item
        .select(&IMAGE_SELECTOR)
        .next()
        .ok_or(ParseError::MissingImage)?;
    let attrs = img.value();
    let usable = |name: &str| attrs.attr(name).filter(|src| !src.trim().is_empty());
    usable("src")
        .or_else(|| usable("data-src"))
        .map(str::to_string)
        .ok_or(ParseError::MissingThumbnail)
}

#[cfg(test)]
#[path = "leaflets_test.rs"]
mod tests;
