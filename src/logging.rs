use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::GatewayConfig;

const LOG_FILE_PREFIX: &str = "deploy-gateway.log";

/// Installs the global subscriber: stdout always, plus a daily-rolled file when
/// a log directory is configured. Keep the returned guard alive until exit or
/// buffered file lines are lost.
pub fn init_logging(config: &GatewayConfig) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.log_level);

    let stdout_layer = fmt::layer().with_target(true).with_level(true);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Non-blocking writer onto `<dir>/deploy-gateway.log.<date>`, creating `dir` if needed.
fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// `RUST_LOG` wins; otherwise the configured level, otherwise `info`.
fn build_filter(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
