//! Configuration Loader - Environment Reading and Validation
//!
//! Handles reading the process environment, applying defaults, and
//! providing clear error messages for misconfiguration.

use anyhow::{Context, Result};

use super::{AppConfig, ServerConfig, SourcesConfig};

/// Load and validate configuration from the process environment.
///
/// # Errors
/// Returns detailed error if:
/// - `CURVE_API` or `AAVE_API` is unset
/// - A URL is not http(s) or a numeric variable fails to parse
pub fn load_from_env() -> Result<AppConfig> {
  from_lookup(|key| std::env::var(key).ok())
}

/// Build the config from an arbitrary variable lookup.
///
/// Separated from `load_from_env` so tests can inject an environment
/// without mutating the real one.
pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
  let curve_api = get("CURVE_API")
    .context("CURVE_API must be set to Curve's pool-list endpoint URL")?;
  let aave_api = get("AAVE_API")
    .context("AAVE_API must be set to Aave's reserves endpoint URL")?;

  let bind_address = get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
  let log_level = get("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

  let timeout_ms = match get("HTTP_TIMEOUT_MS") {
    Some(raw) => raw
      .parse()
      .with_context(|| format!("HTTP_TIMEOUT_MS must be an integer, got `{raw}`"))?,
    None => 10_000,
  };

  let config = AppConfig {
    server: ServerConfig {
      bind_address,
      log_level,
    },
    sources: SourcesConfig {
      curve_api,
      aave_api,
      timeout_ms,
    },
  };

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  for (name, url) in [
    ("CURVE_API", &config.sources.curve_api),
    ("AAVE_API", &config.sources.aave_api),
  ] {
    anyhow::ensure!(
      url.starts_with("http://") || url.starts_with("https://"),
      "{} must be an http(s) URL, got `{}`",
      name,
      url
    );
  }

  anyhow::ensure!(
    config.sources.timeout_ms > 0,
    "HTTP_TIMEOUT_MS must be positive"
  );
  anyhow::ensure!(
    !config.server.bind_address.is_empty(),
    "BIND_ADDR must not be empty"
  );

  Ok(())
}
