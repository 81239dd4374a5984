use image::RgbImage;

use crate::core::processing::padding::add_letterbox_padding;
use crate::core::processing::resize::{calculate_fit_dimensions, resize_rgb_image};
use crate::error::Result;
use crate::types::{CanvasSpec, ResampleFilter};

/// Compose a wallpaper: scale `image` into the canvas' bottom two-thirds and
/// pad the rest with the background color.
///
/// The result is always exactly `canvas.width x canvas.height`.
pub fn compose(image: &RgbImage, canvas: &CanvasSpec, filter: ResampleFilter) -> Result<RgbImage> {
    let fit = calculate_fit_dimensions(image.width(), image.height(), canvas)?;
    let resized = resize_rgb_image(image, fit.width, fit.height, filter)?;
    Ok(add_letterbox_padding(&resized, canvas))
}
