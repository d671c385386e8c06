//! HTTP client for the leaflet catalog site.

use std::time::Duration;

use leaflets_core::{AppConfig, LeafletRecord, ShopDirectory};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::leaflets::parse_shop_page;
use crate::shops::parse_shops;

/// Relative path of the category page that lists every hypermarket.
pub const SHOP_DIRECTORY_PATH: &str = "hypermarkte/";

/// Fetches catalog pages from a single site root.
///
/// One `reqwest::Client` is reused for every request, so pooled connections
/// carry over between pages. Requests are never retried: any
/// non-2xx status or transport failure is returned to the caller.
pub struct LeafletClient {
    client: Client,
    base_url: Url,
}

impl LeafletClient {
    /// Creates a `LeafletClient` rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Config`] if `base_url` is not an absolute
    /// `http(s)` URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let base_url = leaflets_core::parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates a `LeafletClient` from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`LeafletClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.base_url.as_str(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolves a site-relative path (as found in shop links) against the
    /// base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPageUrl`] if the path cannot be joined.
    pub fn page_url(&self, path: &str) -> Result<String, ScraperError> {
        self.base_url
            .join(path.trim())
            .map(String::from)
            .map_err(|e| ScraperError::InvalidPageUrl {
                path: path.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network, TLS, or body decoding failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches the hypermarket category page and parses its shop list.
    ///
    /// # Errors
    ///
    /// Propagates any [`LeafletClient::fetch_page`] error.
    pub async fn fetch_shops(&self) -> Result<ShopDirectory, ScraperError> {
        let url = self.page_url(SHOP_DIRECTORY_PATH)?;
        let html = self.fetch_page(&url).await?;
        let shops = parse_shops(&html);
        tracing::info!(count = shops.len(), "discovered shops");
        Ok(shops)
    }

    /// Fetches one shop's page and parses the current leaflets on it.
    ///
    /// Items that fail to parse are logged and skipped; only fetch failures
    /// are returned as errors.
    ///
    /// # Errors
    ///
    /// Propagates any [`LeafletClient::fetch_page`] error.
    pub async fn fetch_shop_leaflets(
        &self,
        shop_name: &str,
        shop_path: &str,
    ) -> Result<Vec<LeafletRecord>, ScraperError> {
        let url = self.page_url(shop_path)?;
        let html = self.fetch_page(&url).await?;
        let leaflets = parse_shop_page(&html, shop_name);
        tracing::debug!(shop = shop_name, count = leaflets.len(), "parsed shop page");
        Ok(leaflets)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
