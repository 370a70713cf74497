//! Structured logging for the orrery demo.
//!
//! Provides structured, filterable logging via the `tracing` ecosystem:
//! console output with uptime timestamps and module paths, plus optional JSON
//! file logging in debug builds. Integrates with the configuration system to
//! allow runtime log level control.

use orrery_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Console output shows module paths, severity, and time since startup. The
/// filter comes from `RUST_LOG` when set, otherwise from the config's
/// `debug.log_level`, defaulting to info with wgpu/naga noise suppressed.
/// When `debug_build` is true and `log_dir` is given, a structured JSON log
/// file is written as well.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    // RUST_LOG wins over the config value, which wins over the default.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            EnvFilter::new(&config.debug.log_level)
        }
        _ => default_env_filter(),
    });

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("orrery.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string: info for the demo,
/// warn for the chatty wgpu and naga targets.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info,wgpu=warn,naga=warn")
}
