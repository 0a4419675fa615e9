use std::path::{Path, PathBuf};

use super::data::{OutputConfig, Phase, Preview, PreviewState};
use crate::codec::{self, CodecError, OutputFormat};
use crate::platform::Platform;
use crate::ui::dialogs::Dialogs;

/// Result of a "Compress & Save" click
#[derive(Debug)]
pub enum SaveOutcome {
    /// Nothing selected; the user was warned
    NoSelection,
    /// The destination dialog was cancelled; nothing was written
    Cancelled,
    /// The compressed copy was written to this path
    Saved(PathBuf),
    /// Compression failed; the user saw the error
    Failed(CodecError),
}

/// Interactive shell state.
///
/// Owns the selected image, its preview and the output settings for
/// the lifetime of the window. Event handlers borrow it mutably, one
/// event at a time.
pub struct Session {
    platform: Platform,
    selected: Option<PathBuf>,
    preview: PreviewState,
    config: OutputConfig,
    phase: Phase,
}

impl Session {
    pub fn new(platform: Platform) -> Self {
        let config = OutputConfig::for_platform(&platform);
        Session {
            platform,
            selected: None,
            preview: PreviewState::Empty,
            config,
            phase: Phase::Idle,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn config(&self) -> OutputConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_quality(&mut self, quality: u8) {
        self.config.set_quality(quality);
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        if !self.config.set_format(format, &self.platform) {
            log::warn!("⚠️  {} is not available on this platform", format);
        }
    }

    /// Let the user pick an image and load its preview. Cancelling keeps
    /// the current selection.
    pub fn select_image(&mut self, dialogs: &impl Dialogs) {
        if let Some(path) = dialogs.pick_image() {
            self.load_selection(path, dialogs);
        }
    }

    /// Record `path` as the selection and render its preview.
    ///
    /// Paths without a recognized image extension are rejected. A file that
    /// fails to decode stays selected, with a failed preview.
    pub fn load_selection(&mut self, path: PathBuf, dialogs: &impl Dialogs) {
        if !codec::is_image_file(&path) {
            log::warn!("⚠️  Not an image file: {}", path.display());
            dialogs.show_warning(
                "Unsupported file",
                &format!("{} is not a recognized image file.", path.display()),
            );
            return;
        }

        log::info!("📁 Selected {}", path.display());
        self.phase = Phase::Previewing;

        match codec::render_preview(&path) {
            Ok(bitmap) => {
                self.preview = PreviewState::Ready(Preview::from(bitmap));
            }
            Err(e) => {
                log::error!("❌ Preview failed: {}", e);
                self.preview = PreviewState::Failed;
                dialogs.show_error("Error", &format!("Image preview failed: {}", e));
            }
        }
        self.selected = Some(path);
    }

    /// Ask for a destination and compress the selected image into it.
    ///
    /// Runs synchronously; the caller's event loop is blocked until the
    /// encoder finishes. Every outcome has already been reported to the
    /// user when this returns.
    pub fn compress_and_save(&mut self, dialogs: &impl Dialogs) -> SaveOutcome {
        let Some(input) = self.selected.clone() else {
            dialogs.show_warning("No image", "Please select an image first.");
            return SaveOutcome::NoSelection;
        };

        let OutputConfig { format, quality } = self.config;

        self.phase = Phase::Saving;
        let destination = dialogs
            .pick_destination(format)
            .filter(|path| !path.as_os_str().is_empty());
        self.phase = Phase::Previewing;

        let Some(destination) = destination else {
            log::debug!("Save cancelled");
            return SaveOutcome::Cancelled;
        };
        let destination = with_default_extension(destination, format);

        match codec::compress(&input, &destination, quality, format) {
            Ok(_) => {
                dialogs.show_info(
                    "Success",
                    &format!("Image saved to {}", destination.display()),
                );
                SaveOutcome::Saved(destination)
            }
            Err(e) => {
                log::error!("❌ Compression failed ({:?} error): {}", e.kind(), e);
                dialogs.show_error("Error", &e.to_string());
                SaveOutcome::Failed(e)
            }
        }
    }
}

/// Append the format's extension when the chosen path has none
pub fn with_default_extension(mut path: PathBuf, format: OutputFormat) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(format.extension());
    }
    path
}
