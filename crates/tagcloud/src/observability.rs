//! Logging setup: human-readable events on stderr, optional JSONL file.
//!
//! The log file location is resolved from, in order:
//! `TAGCLOUD_LOG_PATH`, `TAGCLOUD_LOG_DIR`, then the configured `log_dir`.
//! Without any of them only stderr logging is installed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const ENV_LOG_PATH: &str = "TAGCLOUD_LOG_PATH";
const ENV_LOG_DIR: &str = "TAGCLOUD_LOG_DIR";
const LOG_FILE_NAME: &str = "tagcloud.jsonl";

/// Where logs go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL log file, if file logging is enabled.
    pub log_path: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `log_dir`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH)
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os(ENV_LOG_DIR).map(|dir| PathBuf::from(dir).join(LOG_FILE_NAME))
            })
            .or_else(|| log_dir.map(|dir| dir.join(LOG_FILE_NAME)));
        Self { log_path }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` keeps errors only, each
/// `-v` raises the level (debug, then trace), and with neither the
/// configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file when dropped; keep it alive for
/// the whole run.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_path {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
