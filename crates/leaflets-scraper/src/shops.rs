//! Shop directory parsing for the hypermarket category page.

use std::sync::LazyLock;

use leaflets_core::ShopDirectory;
use scraper::{Html, Selector};

static SHOP_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#left-category-shops a").expect("valid shop link selector")
});

/// Collects the shop links from the left-hand category sidebar.
///
/// Each anchor with a non-empty `href` maps its trimmed text to that `href`.
/// Anchors without an `href` are skipped. When two anchors share a name, the
/// later `href` wins.
#[must_use]
pub fn parse_shops(html: &str) -> ShopDirectory {
    let document = Html::parse_document(html);
    let mut shops = ShopDirectory::new();

    for link in document.select(&SHOP_LINK_SELECTOR) {
        let Some(href) = link.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        let name: String = link.text().collect();
        shops.insert(name.trim(), href);
    }

    shops
}
