use std::path::Path;

/// Extensions recognized as images (lowercase, without the dot)
pub const RECOGNIZED_EXTENSIONS: [&str; 13] = [
    "jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp", "ico", "ppm", "pgm", "pbm", "svg",
];

/// Check whether a path names an image file, judging by its extension only.
/// No I/O is done; a missing extension is never an image.
pub fn is_image_file(path: impl AsRef<Path>) -> bool {
    match path.as_ref().extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            RECOGNIZED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
