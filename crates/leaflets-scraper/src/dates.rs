//! Validity-period extraction from the free-text date line of a brochure.
//!
//! The site renders either a range (`01.03.2024 - 15.03.2024`) or a single
//! end date with some lead-in text (`gültig bis 15.03.2024`). Anything else
//! is rejected rather than guessed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::ParseError;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}\.\d{2}\.\d{4})\s*-\s*(\d{2}\.\d{2}\.\d{4})").expect("valid range regex")
});
static SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").expect("valid date regex"));

const SOURCE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Normalized validity period of one leaflet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub from: Option<NaiveDate>,
    pub to: NaiveDate,
}

/// Pulls the raw `(from, to)` date strings out of `text`.
///
/// A range match wins. Otherwise the first standalone date becomes the end
/// date and the start is left open.
///
/// # Errors
///
/// Returns [`ParseError::NoDateFound`] when the text contains no date at all.
pub fn extract_raw_dates(text: &str) -> Result<(Option<&str>, &str), ParseError> {
    if let Some(caps) = RANGE_RE.captures(text) {
        if let (Some(from), Some(to)) = (caps.get(1), caps.get(2)) {
            return Ok((Some(from.as_str()), to.as_str()));
        }
    }

    SINGLE_RE
        .find(text)
        .map(|m| (None, m.as_str()))
        .ok_or_else(|| ParseError::NoDateFound {
            text: text.to_string(),
        })
}

/// Parses a `DD.MM.YYYY` date as printed on the site.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] for strings that are not a real
/// calendar date in that format (e.g. `31.02.2024`).
pub fn parse_site_date(raw: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(raw, SOURCE_DATE_FORMAT).map_err(|source| ParseError::InvalidDate {
        raw: raw.to_string(),
        source,
    })
}

/// Extracts and normalizes the validity period from a brochure's date line.
///
/// # Errors
///
/// Returns [`ParseError::NoDateFound`] or [`ParseError::InvalidDate`].
pub fn parse_validity(text: &str) -> Result<Validity, ParseError> {
    let (raw_from, raw_to) = extract_raw_dates(text)?;
    let to = parse_site_date(raw_to)?;
    let from = match raw_from {
        Some(raw) if !raw.is_empty() => Some(parse_site_date(raw)?),
        _ => None,
    };
    Ok(Validity { from, to })
}
