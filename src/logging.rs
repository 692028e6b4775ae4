//! Tracing setup
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins over the configured level, and sqlx
/// query logging is always held at warn.
pub fn build_filter(level: &str) -> EnvFilter {
  let base = std::env::var("RUST_LOG")
    .map_or_else(|_| EnvFilter::new(level), |directive| EnvFilter::new(directive));

  base.add_directive(
    "sqlx=warn"
      .parse()
      .unwrap_or_else(|_| tracing::Level::WARN.into()),
  )
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: &str) {
  let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

  if tracing_subscriber::registry()
    .with(build_filter(level))
    .with(layer)
    .try_init()
    .is_err()
  {
    tracing::debug!("Tracing subscriber already installed");
  }
}
