//! Texture sourcing for the three bodies.
//!
//! Each body looks for an equirectangular map named after it in the assets
//! directory (`sun.jpg`, `earth.png`, ...). When no file is found the body
//! falls back to a procedural placeholder so the demo runs without any
//! downloaded assets.

use std::path::Path;

use orrery_render::{LoadedImage, load_rgba_image};
use tracing::{info, warn};

/// Side length of the procedural fallback textures.
const FALLBACK_SIZE: u32 = 256;

/// Extensions probed for each body map, in order.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Resolve the texture for a body: a file from `assets_dir` if one exists,
/// otherwise a procedural placeholder.
pub fn body_image(assets_dir: &Path, name: &str) -> LoadedImage {
    for ext in IMAGE_EXTENSIONS {
        let path = assets_dir.join(format!("{name}.{ext}"));
        if !path.is_file() {
            continue;
        }
        match load_rgba_image(&path) {
            Ok(image) => {
                info!(
                    "Loaded texture for '{name}' from {} ({}x{})",
                    path.display(),
                    image.width,
                    image.height
                );
                return image;
            }
            Err(err) => {
                warn!("Failed to decode {}: {err}", path.display());
            }
        }
    }

    warn!("No texture file for '{name}' in {}, using procedural placeholder", assets_dir.display());
    procedural_image(name)
}

/// Deterministic placeholder image for a body name.
pub fn procedural_image(name: &str) -> LoadedImage {
    match name {
        "sun" => generate(sun_texel),
        "earth" => generate(earth_texel),
        "moon" => generate(moon_texel),
        _ => generate(checker_texel),
    }
}

fn generate(texel: fn(u32, u32) -> [u8; 4]) -> LoadedImage {
    let size = FALLBACK_SIZE;
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            data.extend_from_slice(&texel(x, y));
        }
    }
    LoadedImage {
        data,
        width: size,
        height: size,
    }
}

/// Radial yellow-to-orange gradient from the image center.
fn sun_texel(x: u32, y: u32) -> [u8; 4] {
    let half = FALLBACK_SIZE as f32 / 2.0;
    let dx = x as f32 - half;
    let dy = y as f32 - half;
    let t = ((dx * dx + dy * dy).sqrt() / half).min(1.0);
    let g = 230.0 - 90.0 * t;
    [255, g as u8, 40, 255]
}

/// Blue oceans with green latitude bands.
fn earth_texel(_x: u32, y: u32) -> [u8; 4] {
    let band = (y as f32 / FALLBACK_SIZE as f32 * std::f32::consts::TAU * 3.0).sin();
    if band > 0.35 {
        [40, 150, 60, 255]
    } else {
        [30, 70, 170, 255]
    }
}

/// Gray with deterministic darker speckles.
fn moon_texel(x: u32, y: u32) -> [u8; 4] {
    // Small integer hash keeps the pattern stable across runs.
    let h = x.wrapping_mul(374_761_393).wrapping_add(y.wrapping_mul(668_265_263));
    let h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    let v = if h % 11 == 0 { 100 } else { 160 };
    [v, v, v, 255]
}

/// Magenta/black checkerboard for unknown bodies.
fn checker_texel(x: u32, y: u32) -> [u8; 4] {
    if ((x / 32) + (y / 32)) % 2 == 0 {
        [255, 0, 255, 255]
    } else {
        [0, 0, 0, 255]
    }
}
