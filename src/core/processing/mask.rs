use image::RgbImage;
use tracing::debug;

use crate::types::{Rect, Rgb};

/// Clip a closed rectangle `[x, x+w] x [y, y+h]` to `[0, width) x [0, height)`.
///
/// Returns inclusive `(x0, y0, x1, y1)` pixel bounds, or `None` when nothing
/// of the rectangle lies inside the image.
pub fn clip_rect(rect: &Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = rect.right().min(i64::from(width) - 1);
    let y1 = rect.bottom().min(i64::from(height) - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Fill the clipped rectangle in place, boundary pixels included.
pub fn cover_in_place(image: &mut RgbImage, rect: &Rect, fill: Rgb) {
    let Some((x0, y0, x1, y1)) = clip_rect(rect, image.width(), image.height()) else {
        debug!(
            "Mask rectangle {:?} lies outside {}x{} image, nothing to cover",
            rect,
            image.width(),
            image.height()
        );
        return;
    };
    debug!("Covering ({}, {})-({}, {}) with {}", x0, y0, x1, y1, fill);
    let pixel = fill.to_pixel();
    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x, y, pixel);
        }
    }
}

/// Return a copy of `image` with the rectangle covered by `fill`.
pub fn cover(image: &RgbImage, rect: &Rect, fill: Rgb) -> RgbImage {
    let mut covered = image.clone();
    cover_in_place(&mut covered, rect, fill);
    covered
}
