//! The leaflet record written to the output document.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One promotional leaflet listed on a shop page.
///
/// Serializes to a flat object whose six values are all strings:
/// `valid_from` is `""` when the listing carries only an end date, and
/// `parsed_time` uses `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafletRecord {
    pub title: String,
    pub thumbnail: String,
    pub shop_name: String,
    #[serde(with = "optional_date")]
    pub valid_from: Option<NaiveDate>,
    pub valid_to: NaiveDate,
    #[serde(with = "parsed_time")]
    pub parsed_time: NaiveDateTime,
}

impl LeafletRecord {
    /// Builds a record, rejecting empty titles and thumbnails.
    ///
    /// `parsed_time` is truncated to whole seconds so the in-memory value
    /// matches what ends up on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTitle`] or [`CoreError::EmptyThumbnail`].
    pub fn new(
        title: impl Into<String>,
        thumbnail: impl Into<String>,
        shop_name: impl Into<String>,
        valid_from: Option<NaiveDate>,
        valid_to: NaiveDate,
        parsed_time: NaiveDateTime,
    ) -> Result<Self, CoreError> {
        use chrono::SubsecRound;

        let title = title.into();
        if title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        let thumbnail = thumbnail.into();
        if thumbnail.trim().is_empty() {
            return Err(CoreError::EmptyThumbnail);
        }

        Ok(Self {
            title,
            thumbnail,
            shop_name: shop_name.into(),
            valid_from,
            valid_to,
            parsed_time: parsed_time.trunc_subsecs(0),
        })
    }
}

const PARSED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_str(""),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

mod parsed_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::PARSED_TIME_FORMAT;

    pub(super) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(PARSED_TIME_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, PARSED_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
