use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{CanvasSpec, ResampleFilter};

/// Which bound the scaled image fills exactly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FitAxis {
    Width,
    Height,
}

/// Scaled size of a source image inside the canvas' bottom region.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FitDimensions {
    pub width: u32,
    pub height: u32,
    pub axis: FitAxis,
}

/// Fit `original_cols x original_rows` into `canvas.width x canvas.region_height()`,
/// preserving aspect ratio.
///
/// A source proportionally wider than the region fills its width, otherwise its
/// height. The free dimension is rounded half away from zero and never drops
/// below one pixel.
pub fn calculate_fit_dimensions(
    original_cols: u32,
    original_rows: u32,
    canvas: &CanvasSpec,
) -> Result<FitDimensions> {
    if original_cols == 0 || original_rows == 0 {
        return Err(Error::InvalidGeometry {
            what: "source image",
            width: original_cols,
            height: original_rows,
        });
    }
    canvas.validate()?;

    let region_height = canvas.region_height();
    let image_ratio = original_cols as f64 / original_rows as f64;
    let region_ratio = canvas.width as f64 / region_height as f64;

    let fit = if image_ratio > region_ratio {
        let new_rows = (canvas.width as f64 / image_ratio).round() as u32;
        FitDimensions {
            width: canvas.width,
            height: new_rows.max(1),
            axis: FitAxis::Width,
        }
    } else {
        let new_cols = (region_height as f64 * image_ratio).round() as u32;
        FitDimensions {
            width: new_cols.max(1),
            height: region_height,
            axis: FitAxis::Height,
        }
    };

    debug!(
        "Fit {}x{} (ratio {:.4}) into {}x{} region (ratio {:.4}): {:?}",
        original_cols,
        original_rows,
        image_ratio,
        canvas.width,
        region_height,
        region_ratio,
        fit
    );
    Ok(fit)
}

/// Resample an RGB image with a convolution filter.
pub fn resize_rgb_image(
    image: &RgbImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    if (image.width(), image.height()) == (target_cols, target_rows) {
        return Ok(image.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{} ({})",
        image.width(),
        image.height(),
        target_cols,
        target_rows,
        filter
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter.to_filter_type()));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::resize("resized buffer does not match target dimensions"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    fn canvas(width: u32, height: u32) -> CanvasSpec {
        CanvasSpec {
            width,
            height,
            background: Rgb::WHITE,
        }
    }

    #[test]
    fn landscape_source_fits_to_width() {
        let fit = calculate_fit_dimensions(800, 600, &canvas(1080, 1920)).unwrap();
        assert_eq!(
            fit,
            FitDimensions {
                width: 1080,
                height: 810,
                axis: FitAxis::Width
            }
        );
    }

    #[test]
    fn tall_source_fits_to_height() {
        let fit = calculate_fit_dimensions(600, 1600, &canvas(1080, 1920)).unwrap();
        assert_eq!(fit.axis, FitAxis::Height);
        assert_eq!(fit.height, 1280);
        assert_eq!(fit.width, 480);
    }

    #[test]
    fn equal_ratio_takes_height_branch() {
        // 1080 / 1280 exactly: not strictly wider, so fit to height and fill both bounds.
        let fit = calculate_fit_dimensions(540, 640, &canvas(1080, 1920)).unwrap();
        assert_eq!(fit.axis, FitAxis::Height);
        assert_eq!((fit.width, fit.height), (1080, 1280));
    }

    #[test]
    fn rounding_ties_go_up() {
        // 5 / 2.0 = 2.5 -> 3
        let fit = calculate_fit_dimensions(2, 1, &canvas(5, 6)).unwrap();
        assert_eq!((fit.width, fit.height), (5, 3));
        // region 2, 2 * 0.25 = 0.5 -> 1
        let fit = calculate_fit_dimensions(1, 4, &canvas(100, 3)).unwrap();
        assert_eq!((fit.width, fit.height), (1, 2));
    }

    #[test]
    fn rounded_dimension_never_reaches_zero() {
        let fit = calculate_fit_dimensions(1, 100, &canvas(100, 3)).unwrap();
        assert_eq!((fit.width, fit.height), (1, 2));
    }

    #[test]
    fn scaled_image_stays_within_region() {
        let c = canvas(1080, 1920);
        for (w, h) in [(1, 1), (3, 7), (4000, 3), (3, 4000), (1919, 1081), (1081, 1281)] {
            let fit = calculate_fit_dimensions(w, h, &c).unwrap();
            assert!(fit.width <= c.width, "{w}x{h}: {fit:?}");
            assert!(fit.height <= c.region_height(), "{w}x{h}: {fit:?}");
            let src_ratio = w as f64 / h as f64;
            match fit.axis {
                FitAxis::Width => {
                    let exact = c.width as f64 / src_ratio;
                    assert!((fit.height as f64 - exact).abs() <= 0.5 || fit.height == 1);
                }
                FitAxis::Height => {
                    let exact = c.region_height() as f64 * src_ratio;
                    assert!((fit.width as f64 - exact).abs() <= 0.5 || fit.width == 1);
                }
            }
        }
    }

    #[test]
    fn zero_sized_source_is_invalid() {
        let err = calculate_fit_dimensions(0, 10, &canvas(1080, 1920)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry {
                what: "source image",
                ..
            }
        ));
    }

    #[test]
    fn resize_produces_requested_size() {
        let src = RgbImage::from_pixel(40, 30, image::Rgb([10, 200, 30]));
        let out = resize_rgb_image(&src, 17, 9, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (17, 9));
        // A flat image stays flat under a normalized kernel, up to fixed-point rounding.
        for px in out.pixels() {
            for (got, want) in px.0.iter().zip([10u8, 200, 30]) {
                assert!(got.abs_diff(want) <= 1, "{:?}", px);
            }
        }
    }

    #[test]
    fn resize_to_same_size_is_identity() {
        let src = RgbImage::from_fn(8, 8, |x, y| image::Rgb([x as u8, y as u8, 0]));
        let out = resize_rgb_image(&src, 8, 8, ResampleFilter::Bilinear).unwrap();
        assert_eq!(out, src);
    }
}
