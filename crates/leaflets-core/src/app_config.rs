use std::path::PathBuf;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Site root every page URL is built from. Always ends with `/`.
    pub base_url: Url,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.prospektmaschine.de/";
    pub const DEFAULT_OUTPUT_PATH: &'static str = "leaflets.json";
}
