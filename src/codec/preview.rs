/// Preview bitmap generation
/// Decodes the selected image and scales it to a fixed height for display
use image::imageops::FilterType;
use std::path::Path;

use super::compressor::decode;
use super::error::Result;
use crate::config::PREVIEW_HEIGHT;

/// Downscaled RGBA copy of the selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBitmap {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

/// Width of the preview for a source of the given size, keeping the aspect
/// ratio at `target_height`. Truncates like an integer cast, never below 1.
pub fn preview_width(source_width: u32, source_height: u32, target_height: u32) -> u32 {
    if source_height == 0 {
        return 1;
    }
    let scaled = source_width as u64 * target_height as u64 / source_height as u64;
    scaled.clamp(1, u32::MAX as u64) as u32
}

/// Generate the preview bitmap for an image file
pub fn render_preview(path: &Path) -> Result<PreviewBitmap> {
    let img = decode(path)?;
    let width = preview_width(img.width(), img.height(), PREVIEW_HEIGHT);
    let preview = img.resize_exact(width, PREVIEW_HEIGHT, FilterType::CatmullRom);
    let rgba = preview.to_rgba8();

    log::debug!(
        "🖼️  Preview {}x{} -> {}x{} for {}",
        img.width(),
        img.height(),
        rgba.width(),
        rgba.height(),
        path.display()
    );

    Ok(PreviewBitmap {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
