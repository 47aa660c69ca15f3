// catalog_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Bearer secret for write requests. `None` means every write is refused.
  pub api_token: Option<Arc<SecretString>>,

  /// Load the demo products at startup.
  pub seed_catalog: bool,

  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3000,
      api_token: None,
      seed_catalog: true,
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  /// Loads `.env` (if present) and reads the process environment.
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };

    let api_token = lookup("API_TOKEN")
      .filter(|token| !token.is_empty())
      .map(|token| Arc::new(SecretString::from(token)));

    let seed_catalog = match lookup("SEED_CATALOG") {
      Some(raw) => raw
        .trim()
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value '{}': {}", raw, e)))?,
      None => defaults.seed_catalog,
    };

    let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
      None | Some("") | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => {
        return Err(AppError::Config(format!(
          "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
          other
        )))
      }
    };

    Ok(Self {
      server_host,
      server_port,
      api_token,
      seed_catalog,
      log_format,
    })
  }

  /// Logs the loaded settings. Call once a subscriber is installed.
  pub fn log_summary(&self) {
    if self.api_token.is_none() {
      tracing::warn!("API_TOKEN is not set; all write requests will be rejected.");
    }
    tracing::info!(
      server_host = %self.server_host,
      server_port = self.server_port,
      seed_catalog = self.seed_catalog,
      log_format = ?self.log_format,
      "Application configuration loaded."
    );
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
