//! Configuration Module - Environment-based Service Configuration
//!
//! Loads and validates configuration from process environment
//! variables. Endpoint URLs are ALWAYS externalized here - nothing is
//! hardcoded in the domain layer.

pub mod loader;

/// Top-level service configuration.
///
/// Loaded from the environment at startup. All fields are validated
/// before the server begins serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
  /// HTTP server settings.
  pub server: ServerConfig,
  /// Upstream protocol endpoints.
  pub sources: SourcesConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  /// Bind address (`BIND_ADDR`, default `0.0.0.0:8080`).
  pub bind_address: String,
  /// Log level (`LOG_LEVEL`, default `info`).
  pub log_level: String,
}

/// Upstream endpoint configuration.
///
/// Both URLs are required; the service refuses to start without them.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
  /// Curve pool-list endpoint (`CURVE_API`).
  pub curve_api: String,
  /// Aave reserves endpoint (`AAVE_API`).
  pub aave_api: String,
  /// Upstream request timeout in milliseconds (`HTTP_TIMEOUT_MS`,
  /// default 10000).
  pub timeout_ms: u64,
}
