pub mod client;
pub mod dates;
pub mod error;
pub mod leaflets;
pub mod shops;

pub use client::LeafletClient;
pub use error::{ParseError, ScraperError};
pub use leaflets::{parse_leaflet_item, parse_shop_page};
pub use shops::parse_shops;
