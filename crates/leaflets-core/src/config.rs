use url::Url;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// configuration: the public catalog site and `leaflets.json` in the working
/// directory.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = parse_base_url(&or_default(
        "LEAFLETS_BASE_URL",
        AppConfig::DEFAULT_BASE_URL,
    ))?;
    let output_path = PathBuf::from(or_default(
        "LEAFLETS_OUTPUT_PATH",
        AppConfig::DEFAULT_OUTPUT_PATH,
    ));
    let log_level = or_default("LEAFLETS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("LEAFLETS_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEAFLETS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("LEAFLETS_USER_AGENT", "leaflets/0.1 (leaflet-aggregator)");

    Ok(AppConfig {
        base_url,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Parses the catalog site root that every page URL is resolved against.
///
/// Only absolute `http`/`https` URLs with a host are accepted. The path is
/// normalized to end with `/` so relative shop links join below it instead
/// of replacing its last segment.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if `raw` does not parse or is not
/// an `http(s)` URL with a host.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        base_url: trimmed.to_string(),
        reason,
    };

    let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
