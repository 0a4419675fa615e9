//! Process-wide configuration constants
//!
//! QuickPress keeps no settings file. Everything the UI needs to start
//! is fixed here.

/// Application name, used for the window title, heading and process name
pub const APP_NAME: &str = "QuickPress";

/// Initial position of the quality slider
pub const DEFAULT_QUALITY: u8 = 75;
/// Lower bound of the quality slider
pub const MIN_QUALITY: u8 = 10;
/// Upper bound of the quality slider
pub const MAX_QUALITY: u8 = 100;

/// Height of the preview bitmap in pixels (width is proportional)
pub const PREVIEW_HEIGHT: u32 = 150;
/// Size of the preview panel in the main window
pub const PREVIEW_PANEL_WIDTH: f32 = 350.0;
pub const PREVIEW_PANEL_HEIGHT: f32 = 150.0;

/// Initial window size
pub const WINDOW_WIDTH: f32 = 500.0;
pub const WINDOW_HEIGHT: f32 = 450.0;

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Clamp a quality value into the slider range
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
