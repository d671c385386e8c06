//! Shops discovered on the category directory page.

use indexmap::IndexMap;

/// Shop display name mapped to the relative path of its leaflet page, in
/// order of first appearance.
///
/// Inserting a name that is already present replaces its path but keeps its
/// original position. The directory page is not expected to list a shop
/// twice; when it does, the last link wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopDirectory {
    shops: IndexMap<String, String>,
}

impl ShopDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the path for `name`.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.shops.insert(name.into(), url.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// `(name, path)` pairs in directory order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shops
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }
}
