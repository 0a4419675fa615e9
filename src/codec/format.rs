/// Output formats offered by the format selector
///
/// The enum order is the order shown in the dropdown; JPEG comes first and
/// is the initial selection.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Lossy, quality applies
    Jpeg,
    Png,
    /// Lossy through libwebp, quality applies
    WebP,
    Bmp,
    Tiff,
    Gif,
    /// Windows icon, entries are limited to 256x256
    Ico,
}

impl OutputFormat {
    /// Every format, in selector order
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Jpeg,
        OutputFormat::Png,
        OutputFormat::WebP,
        OutputFormat::Bmp,
        OutputFormat::Tiff,
        OutputFormat::Gif,
        OutputFormat::Ico,
    ];

    /// Default file extension used by the save dialog (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Gif => "gif",
            OutputFormat::Ico => "ico",
        }
    }

    /// Whether the encoder takes a quality setting.
    /// Every other format ignores the slider.
    pub fn supports_quality(&self) -> bool {
        matches!(self, OutputFormat::Jpeg | OutputFormat::WebP)
    }

    /// The image crate's format, for the encoders it provides
    pub fn to_image_format(&self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::WebP => image::ImageFormat::WebP,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Ico => image::ImageFormat::Ico,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::Gif => "GIF",
            OutputFormat::Ico => "ICO",
        };
        write!(f, "{}", name)
    }
}
