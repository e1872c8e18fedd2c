//! Tracing subscriber setup.

use super::file_writer::FileWriter;
use crate::domain::{CharpickError, Result};
use crate::infrastructure::paths;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `trace_level` is not configured or does not parse.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber writing to the plugin log file.
///
/// Logging is optional: any setup failure leaves the plugin running without
/// a subscriber. Only the first call takes effect.
///
/// ```no_run
/// use charpick::observability::init_tracing;
/// use charpick::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let _ = try_init_tracing(config);
}

/// Like [`init_tracing`], reporting why logging could not be set up.
///
/// An invalid `trace_level` is not fatal: the default filter is used and the
/// rejected directive is logged once the subscriber is live.
///
/// # Errors
///
/// [`CharpickError::Io`] if the data directory cannot be created.
pub fn try_init_tracing(config: &Config) -> Result<()> {
    std::fs::create_dir_all(paths::get_data_dir())?;

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let (filter, rejected) = match parse_filter(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_TRACE_LEVEL), Some(e)),
    };

    let writer = Arc::new(FileWriter::new(paths::log_file_path()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return Ok(());
    }

    if let Some(e) = rejected {
        tracing::warn!(error = %e, "ignoring trace_level");
    }
    Ok(())
}

fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| CharpickError::Config(format!("invalid trace_level {level:?}: {e}")))
}
