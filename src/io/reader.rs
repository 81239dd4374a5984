use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode any format the `image` crate understands into 8-bit RGB.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Alpha is discarded.
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| Error::decode(path, e))?
        .decode()
        .map_err(|e| Error::decode(path, e))?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_decode_failure() {
        let err = decode_rgb(Path::new("/nonexistent/raw.png")).unwrap_err();
        assert!(matches!(err, Error::DecodeFailure { .. }));
    }

    #[test]
    fn garbage_file_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            decode_rgb(&path),
            Err(Error::DecodeFailure { .. })
        ));
    }

    #[test]
    fn format_comes_from_contents_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("real.png");
        let misnamed = dir.path().join("wall.jpg");
        image::RgbImage::from_pixel(4, 3, image::Rgb([1, 2, 3]))
            .save(&png)
            .unwrap();
        std::fs::copy(&png, &misnamed).unwrap();
        let rgb = decode_rgb(&misnamed).unwrap();
        assert_eq!(rgb.dimensions(), (4, 3));
        assert_eq!(rgb.get_pixel(3, 2).0, [1, 2, 3]);
    }

    #[test]
    fn rgba_input_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();
        let rgb = decode_rgb(&path).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(1, 1).0, [10, 20, 30]);
    }
}
