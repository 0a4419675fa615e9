/// Image codec module
///
/// This module handles:
/// - The output formats offered by the format selector
/// - Decoding a source image and re-encoding it in the chosen format
/// - Recognizing image files by extension
/// - Generating the small preview bitmap shown in the main window
pub mod format;
pub mod compressor;
pub mod classify;
pub mod preview;
pub mod error;

pub use classify::is_image_file;
pub use compressor::compress;
pub use error::{CodecError, ErrorKind};
pub use format::OutputFormat;
pub use preview::{render_preview, PreviewBitmap};
