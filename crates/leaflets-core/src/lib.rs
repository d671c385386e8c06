pub mod app_config;
pub mod config;
pub mod leaflet;
pub mod shop;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, parse_base_url};
pub use leaflet::LeafletRecord;
pub use shop::ShopDirectory;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("leaflet title is empty")]
    EmptyTitle,

    #[error("leaflet thumbnail is empty")]
    EmptyThumbnail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
