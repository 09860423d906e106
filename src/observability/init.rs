//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "countryscope.log";

/// Initializes the tracing subscriber with file-based logging.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events with an `EnvFilter` built from `config.trace_level`
/// 2. Formats them with the `fmt` layer, without ANSI colors
/// 3. Appends them to `<data_dir>/countryscope.log`, rotating at 10 MB
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if that fails, since logging is optional
/// - Only the first call takes effect
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = Arc::new(FileWriter::new(config.data_dir.join(LOG_FILE_NAME)));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
