// catalog_server/src/telemetry.rs

//! Tracing subscriber setup.

use crate::config::LogFormat;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  let installed = match format {
    LogFormat::Pretty => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
  if let Err(e) = installed {
    // A subscriber was already set (e.g. by a test harness); keep it.
    tracing::debug!(error = %e, "Tracing subscriber already installed.");
  }
}
