/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the codec layer and the UI layer.
use iced::widget::image::Handle;

use crate::codec::{OutputFormat, PreviewBitmap};
use crate::config::{clamp_quality, DEFAULT_QUALITY};
use crate::platform::Platform;

/// Output settings chosen with the format selector and quality slider.
/// Read when the user saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Always within [MIN_QUALITY, MAX_QUALITY]
    pub quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl OutputConfig {
    /// Default configuration restricted to what `platform` can offer
    pub fn for_platform(platform: &Platform) -> Self {
        let format = platform
            .output_formats()
            .first()
            .copied()
            .unwrap_or(OutputFormat::Jpeg);
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the quality, clamped to the slider range
    pub fn set_quality(&mut self, quality: u8) {
        self.quality = clamp_quality(quality);
    }

    /// Switch format. Returns false (and keeps the current format)
    /// if the platform does not offer `format`.
    pub fn set_format(&mut self, format: OutputFormat, platform: &Platform) -> bool {
        if !platform.supports(format) {
            return false;
        }
        self.format = format;
        true
    }
}

/// Preview of the selected image, ready to draw
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl From<PreviewBitmap> for Preview {
    fn from(bitmap: PreviewBitmap) -> Self {
        Preview {
            width: bitmap.width,
            height: bitmap.height,
            handle: Handle::from_rgba(bitmap.width, bitmap.height, bitmap.pixels),
        }
    }
}

/// What the preview panel shows
#[derive(Debug, Clone, Default)]
pub enum PreviewState {
    /// Nothing selected yet
    #[default]
    Empty,
    Ready(Preview),
    /// A file was selected but could not be decoded
    Failed,
}

/// Where the shell is in its interaction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image selected
    Idle,
    /// An image is selected (its preview may have failed)
    Previewing,
    /// The destination dialog is open
    Saving,
}
