// rosterwatch/rosterwatch-cli
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::{env, fs};

use anyhow::Result;
use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

const LOG_FILENAME: &str = "rosterwatch-cli.log";

/// Logs human readable lines to stderr and JSON lines to `logs/rosterwatch-cli.log`. The log
/// file is truncated on every start.
pub fn enable_logging(max_level: Level) -> Result<()> {
    let log_dir = env::current_dir()?.join("logs");
    let log_file_path = log_dir.join(LOG_FILENAME);
    if log_file_path.exists() {
        fs::remove_file(log_file_path)?;
    }

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILENAME);

    let stderr_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::from_level(max_level));

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    Registry::default()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
