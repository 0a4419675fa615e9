/// Compression service
///
/// Decodes the source image fully into memory and re-encodes it in the
/// requested format. Only JPEG and WebP receive the quality value; the
/// other encoders run with their defaults.
use image::error::{EncodingError, ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use std::borrow::Cow;
use std::io::{Cursor, Write};
use std::path::Path;

use super::error::{CodecError, Result};
use super::format::OutputFormat;
use crate::config::clamp_quality;

/// Largest width or height an ICO entry can hold
const ICO_MAX_DIMENSION: u32 = 256;

/// Compress `input` into `output` using `format`.
///
/// Writes exactly one file at `output`, replacing any existing file.
/// The encoded bytes go to a temporary file in the destination directory
/// first and are renamed into place, so a failure leaves `output` untouched.
///
/// Returns the size of the written file in bytes.
pub fn compress(input: &Path, output: &Path, quality: u8, format: OutputFormat) -> Result<u64> {
    let img = decode(input)?;
    let quality = clamp_quality(quality);

    log::info!(
        "🗜️  Compressing {} ({}x{}) to {} at {}",
        input.display(),
        img.width(),
        img.height(),
        format,
        if format.supports_quality() { format!("quality {}", quality) } else { "default settings".to_string() }
    );

    let bytes = encode(&img, format, quality)?;
    write_replacing(output, &bytes)?;

    log::info!("✅ Saved {} bytes to {}", bytes.len(), output.display());
    Ok(bytes.len() as u64)
}

/// Decode an image file, sniffing the format from its content
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_error = |source: ImageError| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(e.into()))?
        .decode()
        .map_err(decode_error)
}

/// Encode an image in memory.
/// `quality` is only read for formats where `supports_quality()` holds.
pub fn encode(img: &DynamicImage, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
    let encode_error = |source: ImageError| CodecError::Encode { format, source };
    let mut buffer = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg => {
            if img.color().has_alpha() {
                return Err(encode_error(unsupported_color(img, image::ImageFormat::Jpeg)));
            }
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
            to_eight_bit(img).write_with_encoder(encoder).map_err(encode_error)?;
        }
        OutputFormat::WebP => {
            return encode_webp(img, quality).map_err(encode_error);
        }
        OutputFormat::Ico => {
            prepare_for_ico(img)
                .write_to(&mut buffer, format.to_image_format())
                .map_err(encode_error)?;
        }
        OutputFormat::Bmp => {
            to_eight_bit(img)
                .write_to(&mut buffer, format.to_image_format())
                .map_err(encode_error)?;
        }
        OutputFormat::Gif => {
            prepare_for_gif(img)
                .write_to(&mut buffer, format.to_image_format())
                .map_err(encode_error)?;
        }
        OutputFormat::Tiff => {
            prepare_for_tiff(img)
                .write_to(&mut buffer, format.to_image_format())
                .map_err(encode_error)?;
        }
        OutputFormat::Png => {
            img.write_to(&mut buffer, format.to_image_format())
                .map_err(encode_error)?;
        }
    }

    Ok(buffer.into_inner())
}

/// The encoder cannot store this image's pixel mode
fn unsupported_color(img: &DynamicImage, format: image::ImageFormat) -> ImageError {
    ImageError::Unsupported(UnsupportedError::from_format_and_kind(
        ImageFormatHint::Exact(format),
        UnsupportedErrorKind::Color(img.color().into()),
    ))
}

/// Reduce to 8-bit gray or RGB(A), the modes the JPEG and BMP encoders
/// accept. Alpha is kept when present.
fn to_eight_bit(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        DynamicImage::ImageLuma16(_) => Cow::Owned(DynamicImage::ImageLuma8(img.to_luma8())),
        _ if img.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// The GIF encoder only takes 8-bit RGB or RGBA frames
fn prepare_for_gif(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Cow::Borrowed(img),
        _ if img.color().has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// TIFF has no gray+alpha layout in the encoder; those go to RGBA
fn prepare_for_tiff(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageLumaA8(_) => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        DynamicImage::ImageLumaA16(_) => Cow::Owned(DynamicImage::ImageRgba16(img.to_rgba16())),
        _ => Cow::Borrowed(img),
    }
}

/// Lossy WebP through libwebp. RGB stays RGB, everything else goes through RGBA.
fn encode_webp(img: &DynamicImage, quality: u8) -> std::result::Result<Vec<u8>, ImageError> {
    let rgba;
    let encoder = match img {
        DynamicImage::ImageRgb8(rgb) => webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height()),
        _ => {
            rgba = img.to_rgba8();
            webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
        }
    };

    let encoded = encoder.encode_simple(false, quality as f32).map_err(|e| {
        ImageError::Encoding(EncodingError::new(
            ImageFormatHint::Exact(image::ImageFormat::WebP),
            format!("libwebp error: {:?}", e),
        ))
    })?;

    Ok(encoded.to_vec())
}

/// ICO entries are RGBA and at most 256x256. Larger images are shrunk
/// to fit, keeping the aspect ratio.
fn prepare_for_ico(img: &DynamicImage) -> DynamicImage {
    if img.width() <= ICO_MAX_DIMENSION && img.height() <= ICO_MAX_DIMENSION {
        return DynamicImage::ImageRgba8(img.to_rgba8());
    }

    log::debug!(
        "Downscaling {}x{} to fit a {}px icon",
        img.width(),
        img.height(),
        ICO_MAX_DIMENSION
    );
    let fitted = img.resize(ICO_MAX_DIMENSION, ICO_MAX_DIMENSION, FilterType::Lanczos3);
    DynamicImage::ImageRgba8(fitted.to_rgba8())
}

/// Write `bytes` to `output` through a temporary sibling file and an atomic rename
fn write_replacing(output: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| CodecError::Write {
        path: output.to_path_buf(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".quickpress-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(write_error)?;

    temp.write_all(bytes).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(output).map_err(|e| write_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ErrorKind;
    use image::{GenericImageView, ImageBuffer, LumaA, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Gradient with some texture so lossy encoders have work to do
    fn textured_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let noise = ((x * 7919 + y * 104729) % 61) as u8;
            Rgb([
                (x * 255 / width.max(1)) as u8 ^ noise,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 256) as u8 ^ (noise << 2),
            ])
        })
    }

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        textured_image(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_quality_ignored_for_lossless_formats() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 48, 32);

        for format in [
            OutputFormat::Png,
            OutputFormat::Bmp,
            OutputFormat::Gif,
            OutputFormat::Tiff,
            OutputFormat::Ico,
        ] {
            let low = dir.path().join(format!("low.{}", format.extension()));
            let high = dir.path().join(format!("high.{}", format.extension()));

            compress(&input, &low, 10, format).unwrap();
            compress(&input, &high, 100, format).unwrap();

            assert_eq!(
                fs::read(&low).unwrap(),
                fs::read(&high).unwrap(),
                "{} output changed with quality",
                format
            );
        }
    }

    #[test]
    fn test_jpeg_size_grows_with_quality() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 128, 128);
        let low = dir.path().join("low.jpg");
        let high = dir.path().join("high.jpg");

        let low_size = compress(&input, &low, 10, OutputFormat::Jpeg).unwrap();
        let high_size = compress(&input, &high, 95, OutputFormat::Jpeg).unwrap();

        assert!(low_size < high_size, "{} >= {}", low_size, high_size);
        assert_eq!(fs::metadata(&high).unwrap().len(), high_size);
    }

    #[test]
    fn test_webp_size_grows_with_quality() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 128, 128);

        let low_size = compress(&input, &dir.path().join("low.webp"), 10, OutputFormat::WebP).unwrap();
        let high_size = compress(&input, &dir.path().join("high.webp"), 95, OutputFormat::WebP).unwrap();

        assert!(low_size < high_size, "{} >= {}", low_size, high_size);
    }

    #[test]
    fn test_webp_output_is_decodable() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("alpha.png");
        RgbaImage::from_pixel(24, 12, Rgba([200, 10, 10, 128])).save(&input).unwrap();
        let output = dir.path().join("alpha.webp");

        compress(&input, &output, 80, OutputFormat::WebP).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (24, 12));
    }

    #[test]
    fn test_round_trip_png_jpeg_png_keeps_dimensions() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "small.png", 10, 10);
        let jpeg = dir.path().join("small.jpg");
        let back = dir.path().join("back.png");

        compress(&input, &jpeg, 60, OutputFormat::Jpeg).unwrap();
        compress(&jpeg, &back, 60, OutputFormat::Png).unwrap();

        let decoded = image::open(&back).unwrap();
        assert_eq!(decoded.dimensions(), (10, 10));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 16, 16);
        let output = dir.path().join("out.bmp");
        fs::write(&output, b"stale").unwrap();

        compress(&input, &output, 50, OutputFormat::Bmp).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn test_large_image_is_shrunk_for_ico() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "banner.png", 512, 128);
        let output = dir.path().join("banner.ico");

        compress(&input, &output, 50, OutputFormat::Ico).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.dimensions(), (256, 64));
    }

    #[test]
    fn test_corrupt_source_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corrupt.jpg");
        fs::write(&input, [0xFF, 0xD8, 0xFF, 0x00, 0x01]).unwrap();
        let output = dir.path().join("out.png");

        let err = compress(&input, &output, 50, OutputFormat::Png).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_destination_is_encode_error() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 8, 8);
        let output = dir.path().join("missing-dir").join("out.png");

        let err = compress(&input, &output, 50, OutputFormat::Png).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Encode);
        assert!(matches!(err, CodecError::Write { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_successful_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "source.png", 8, 8);
        let output = dir.path().join("out.gif");

        compress(&input, &output, 50, OutputFormat::Gif).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".part"))
            .collect();
        assert!(leftovers.is_empty());
    }

    fn write_la8_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        ImageBuffer::from_fn(12, 6, |x, _| LumaA([(x * 20) as u8, 180u8]))
            .save(&path)
            .unwrap();
        path
    }

    fn write_rgb16_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        ImageBuffer::from_fn(12, 6, |x, y| Rgb([(x * 5000) as u16, (y * 9000) as u16, 40000u16]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_alpha_into_jpeg_is_encode_error() {
        let dir = TempDir::new().unwrap();
        let rgba = dir.path().join("rgba.png");
        RgbaImage::from_pixel(10, 10, Rgba([10, 200, 30, 90])).save(&rgba).unwrap();
        let la = write_la8_png(&dir, "la.png");

        for input in [rgba, la] {
            let output = dir.path().join("out.jpg");

            let err = compress(&input, &output, 50, OutputFormat::Jpeg).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Encode, "{}", input.display());
            assert!(matches!(
                err,
                CodecError::Encode { source: ImageError::Unsupported(_), .. }
            ));
            assert!(!output.exists());
        }
    }

    #[test]
    fn test_sixteen_bit_rgb_converts_for_eight_bit_formats() {
        let dir = TempDir::new().unwrap();
        let input = write_rgb16_png(&dir, "deep.png");

        for format in [OutputFormat::Gif, OutputFormat::Bmp, OutputFormat::Jpeg] {
            let output = dir.path().join(format!("deep.{}", format.extension()));

            compress(&input, &output, 80, format).unwrap();

            assert_eq!(image::open(&output).unwrap().dimensions(), (12, 6), "{}", format);
        }
    }

    #[test]
    fn test_gray_alpha_converts_for_gif_and_tiff() {
        let dir = TempDir::new().unwrap();
        let input = write_la8_png(&dir, "la.png");

        for format in [OutputFormat::Gif, OutputFormat::Tiff] {
            let output = dir.path().join(format!("la.{}", format.extension()));

            compress(&input, &output, 50, format).unwrap();

            let decoded = image::open(&output).unwrap();
            assert_eq!(decoded.dimensions(), (12, 6), "{}", format);
            assert!(decoded.color().has_alpha(), "{} lost alpha", format);
        }
    }
}
