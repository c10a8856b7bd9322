//! Tracing configuration for the portfolio CLI
//!
//! ## Architecture / 架构
//!
//! - **Console**: human-readable lines on stderr; stdout carries command JSON only
//! - **File**: the same format without colors, rotated daily under the logs dir
//! - **Environment-aware**: debug for workspace crates in dev builds, info in release
//!
//! `RUST_LOG` replaces the default directives entirely.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use pf_app::app_paths::AppPaths;
use pf_core::ports::AppDirsPort;
use pf_platform::app_dirs::DirsAppDirsAdapter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "portfolio.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - Third-party crates stay at `warn`
/// - **Development**: debug for every `pf_*` crate
/// - **Production**: info for every `pf_*` crate
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        ["portfolio", "pf_core", "pf_app", "pf_infra", "pf_platform", "pf_shell"]
            .iter()
            .map(|krate| format!("{krate}={app_level}")),
    );
    directives
}

/// Initialize the tracing subscriber
///
/// `log_dir` comes from `[logging] dir`; when `None` the per-user logs
/// directory is used. If the file writer cannot be created the subscriber
/// falls back to the console alone.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer(log_dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err}");
            None
        }
    };

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(console_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn resolve_logs_dir(log_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    match log_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => {
            let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
            Ok(AppPaths::from_app_dirs(&app_dirs).logs_dir)
        }
    }
}

fn build_file_writer(log_dir: Option<&Path>) -> anyhow::Result<NonBlocking> {
    let logs_dir = resolve_logs_dir(log_dir)?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
