//! Binary entry point for the orrery demo.
//!
//! Loads `config/config.ron` (creating it with defaults on first run),
//! applies CLI overrides, initializes logging, and hands the merged
//! configuration to the event loop.

use std::path::{Path, PathBuf};

use clap::Parser;
use orrery_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config"));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config from {}: {err}", config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(Path::new("logs")), cfg!(debug_assertions), Some(&config));

    if let Err(err) = orrery_app::run_with_config(config) {
        tracing::error!("Fatal: {err}");
        std::process::exit(1);
    }
}
