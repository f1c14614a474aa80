use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("PRICECMP_LOG_LEVEL", "info");
    let stores_path = PathBuf::from(or_default("PRICECMP_STORES_PATH", "./config/stores.yaml"));
    let output_dir = PathBuf::from(or_default("PRICECMP_OUTPUT_DIR", "."));
    let match_threshold = parse_threshold(&or_default("PRICECMP_MATCH_THRESHOLD", "70"))?;

    let fetch_timeout_secs = parse_u64("PRICECMP_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default("PRICECMP_FETCH_USER_AGENT", "Mozilla/5.0 (pricecmp)");
    let fetch_max_retries = parse_u32("PRICECMP_FETCH_MAX_RETRIES", "3")?;
    let fetch_retry_backoff_base_secs = parse_u64("PRICECMP_FETCH_RETRY_BACKOFF_BASE_SECS", "5")?;

    Ok(AppConfig {
        log_level,
        stores_path,
        output_dir,
        match_threshold,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_retries,
        fetch_retry_backoff_base_secs,
    })
}

/// Parse a confidence threshold, which must fall in `0..=100`.
fn parse_threshold(s: &str) -> Result<u8, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "PRICECMP_MATCH_THRESHOLD".to_string(),
        reason,
    };
    let value = s.parse::<u8>().map_err(|e| invalid(e.to_string()))?;
    if value > 100 {
        return Err(invalid(format!("{value} is outside 0..=100")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
