//! Command-line argument parsing for the orrery demo.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ShadingVariant};

/// Orrery demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Sun-earth-moon orbital rendering demo")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen.
    #[arg(long)]
    pub fullscreen: Option<bool>,

    /// Shading variant (lit, textured).
    #[arg(long, value_enum)]
    pub variant: Option<ShadingVariant>,

    /// Sphere tessellation: sets both latitude and longitude segment counts.
    #[arg(long)]
    pub segments: Option<u32>,

    /// Directory searched for body textures.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fs) = args.fullscreen {
            self.window.fullscreen = fs;
        }
        if let Some(variant) = args.variant {
            self.scene.variant = variant;
        }
        if let Some(segments) = args.segments {
            self.scene.lat_segments = segments;
            self.scene.lon_segments = segments;
        }
        if let Some(ref assets) = args.assets {
            self.scene.assets_dir = assets.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
