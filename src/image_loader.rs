//! Image decoding into [`PixelBuffer`]s
//!
//! Decoding is delegated to the `image` crate. Images with an alpha channel
//! keep it (4 channels); everything else becomes 8-bit RGB (3 channels).
//!
//! The format comes from the file extension when `image` recognises it and
//! is otherwise sniffed from the leading bytes, so formats `image` was built
//! without are reported as decode errors.

use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{ColorError, Result};

/// Load an image file into a [`PixelBuffer`]
///
/// # Errors
///
/// Returns `ColorError::ImageLoadError` if the file cannot be opened, its
/// format cannot be determined, or it fails to decode.
///
/// # Example
///
/// ```rust,no_run
/// use paint_palette::image_loader::load_pixel_buffer;
/// use std::path::Path;
///
/// let buffer = load_pixel_buffer(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", buffer.width(), buffer.height());
/// # Ok::<(), paint_palette::ColorError>(())
/// ```
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let mut reader = ImageReader::open(path)
        .map_err(|e| ColorError::image_load(format!("Failed to open image file: {}", path.display()), e))?;
    if reader.format().is_none() {
        reader = reader
            .with_guessed_format()
            .map_err(|e| ColorError::image_load(format!("Failed to read image file: {}", path.display()), e))?;
    }

    let img = reader
        .decode()
        .map_err(|e| ColorError::image_load(format!("Failed to decode image: {}", path.display()), e))?;

    Ok(from_dynamic_image(&img))
}

/// Decode an in-memory encoded image (format sniffed from the bytes)
pub fn decode_pixel_buffer(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes).map_err(|e| ColorError::image_load("Unable to decode image", e))?;
    Ok(from_dynamic_image(&img))
}

/// Convert a decoded image, keeping alpha when present
pub fn from_dynamic_image(img: &DynamicImage) -> PixelBuffer {
    let (width, height) = (img.width(), img.height());
    if img.color().has_alpha() {
        PixelBuffer::new(img.to_rgba8().into_raw(), width, height, 4)
    } else {
        PixelBuffer::new(img.to_rgb8().into_raw(), width, height, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_rgb_png() {
        let img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let buffer = decode_pixel_buffer(&encode_png(DynamicImage::ImageRgb8(img))).unwrap();

        assert_eq!((buffer.width(), buffer.height(), buffer.channels()), (3, 2, 3));
        assert_eq!(&buffer.as_bytes()[..3], &[10, 20, 30]);
        assert!(buffer.validate().is_ok());
    }

    #[test]
    fn test_decode_rgba_png_keeps_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 128]));
        let buffer = decode_pixel_buffer(&encode_png(DynamicImage::ImageRgba8(img))).unwrap();

        assert_eq!(buffer.channels(), 4);
        assert_eq!(&buffer.as_bytes()[..4], &[1, 2, 3, 128]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_pixel_buffer(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, ColorError::ImageLoadError { .. }));
    }

    #[test]
    fn test_load_sniffs_format_without_extension() {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]));
        let path = std::env::temp_dir().join(format!("paint_palette_sniff_{}.bin", std::process::id()));
        std::fs::write(&path, encode_png(DynamicImage::ImageRgb8(img))).unwrap();

        let loaded = load_pixel_buffer(&path);
        std::fs::remove_file(&path).ok();
        let buffer = loaded.unwrap();
        assert_eq!((buffer.width(), buffer.height(), buffer.channels()), (4, 4, 3));
        assert_eq!(&buffer.as_bytes()[..3], &[200, 100, 50]);
    }

    #[test]
    fn test_load_non_image_file_fails() {
        let path = std::env::temp_dir().join(format!("paint_palette_notes_{}.txt", std::process::id()));
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_pixel_buffer(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ColorError::ImageLoadError { source: Some(_), .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_pixel_buffer(Path::new("nonexistent_file.png")).unwrap_err();
        assert!(matches!(err, ColorError::ImageLoadError { source: Some(_), .. }));
    }
}
