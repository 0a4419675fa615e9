use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

use crate::codec::OutputFormat;

/// Extension groups offered by the open dialog
pub const OPEN_FILTERS: [(&str, &[&str]); 7] = [
    ("JPEG", &["jpg", "jpeg"]),
    ("PNG", &["png"]),
    ("WebP", &["webp"]),
    ("GIF", &["gif"]),
    ("BMP", &["bmp"]),
    ("TIFF", &["tiff", "tif"]),
    ("ICO", &["ico"]),
];

/// Extensions of the "All Images" filter in the save dialog
pub const ALL_IMAGE_EXTENSIONS: [&str; 9] =
    ["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp", "ico"];

/// The modal dialogs the shell talks to the user through.
///
/// Every call blocks until the user dismisses the dialog.
pub trait Dialogs {
    /// Ask for the image to compress. `None` when cancelled.
    fn pick_image(&self) -> Option<PathBuf>;
    /// Ask where to save the compressed copy. `None` when cancelled.
    fn pick_destination(&self, format: OutputFormat) -> Option<PathBuf>;
    fn show_info(&self, title: &str, message: &str);
    fn show_warning(&self, title: &str, message: &str);
    fn show_error(&self, title: &str, message: &str);
}

/// Native dialogs through rfd
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn message(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Dialogs for NativeDialogs {
    fn pick_image(&self) -> Option<PathBuf> {
        OPEN_FILTERS
            .iter()
            .fold(FileDialog::new().set_title("Select Image"), |dialog, (name, extensions)| {
                dialog.add_filter(*name, *extensions)
            })
            .pick_file()
    }

    fn pick_destination(&self, format: OutputFormat) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save Compressed Image")
            .set_file_name(format!("compressed.{}", format.extension()))
            .add_filter(format!("{} files", format), &[format.extension()])
            .add_filter("All Images", &ALL_IMAGE_EXTENSIONS)
            .save_file()
    }

    fn show_info(&self, title: &str, message: &str) {
        Self::message(MessageLevel::Info, title, message);
    }

    fn show_warning(&self, title: &str, message: &str) {
        Self::message(MessageLevel::Warning, title, message);
    }

    fn show_error(&self, title: &str, message: &str) {
        Self::message(MessageLevel::Error, title, message);
    }
}
