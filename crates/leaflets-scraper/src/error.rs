use thiserror::Error;

/// Errors that abort a scrape run.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("cannot resolve page path \"{path}\": {reason}")]
    InvalidPageUrl { path: String, reason: String },

    #[error(transparent)]
    Config(#[from] leaflets_core::ConfigError),
}

/// Why a single brochure item on a shop page could not become a record.
///
/// These never abort a page; the page parser logs them and moves on.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("title element not found")]
    MissingTitle,

    #[error("image element not found")]
    MissingImage,

    #[error("image has neither src nor data-src")]
    MissingThumbnail,

    #[error("date element not found")]
    MissingDateText,

    #[error("no date found in \"{text}\"")]
    NoDateFound { text: String },

    #[error("invalid date \"{raw}\": {source}")]
    InvalidDate {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] leaflets_core::CoreError),
}
