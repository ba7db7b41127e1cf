//! Configuration loading from disk and environment.

use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Environment variables recognized by the overlay, in the order the
/// original deployment documented them.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const ENV_WEBHOOK_URL: &str = "N8N_WEBHOOK_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration: optional TOML file, then environment overlay,
/// then semantic validation.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    overlay(&mut config, |name| std::env::var(name).ok());
    validate(&config)?;

    Ok(config)
}

/// Apply environment variables on top of file values.
///
/// The lookup is injected so tests can drive the overlay without touching
/// process-wide environment state. Blank values are ignored rather than
/// clearing a file-provided credential.
pub fn overlay(config: &mut AppConfig, get: impl Fn(&str) -> Option<String>) {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    if let Some(url) = non_blank(get(ENV_SUPABASE_URL)) {
        config.supabase.url = Some(url);
    }
    if let Some(key) = non_blank(get(ENV_SUPABASE_KEY)) {
        config.supabase.service_role_key = Some(key);
    }
    if let Some(url) = non_blank(get(ENV_WEBHOOK_URL)) {
        config.webhook.url = Some(url);
    }
}

/// Semantic checks beyond what serde enforces.
///
/// Upstream URLs must parse when present; absence stays valid because the
/// gateway downgrades to fallback data instead of failing startup.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(url) = config.supabase.url.as_deref() {
        url::Url::parse(url)
            .map_err(|e| ConfigError::Invalid(format!("supabase.url '{}': {}", url, e)))?;
    }
    if let Some(url) = config.webhook.url.as_deref() {
        url::Url::parse(url)
            .map_err(|e| ConfigError::Invalid(format!("webhook.url '{}': {}", url, e)))?;
    }
    if config.timeouts.upstream_secs == 0 {
        return Err(ConfigError::Invalid(
            "timeouts.upstream_secs must be at least 1".to_string(),
        ));
    }
    Ok(())
}
