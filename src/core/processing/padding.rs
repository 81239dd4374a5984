use image::RgbImage;
use tracing::info;

use crate::types::CanvasSpec;

/// Top-left position of an image `cols` wide on the canvas.
///
/// Horizontally centered with truncating division; vertically fixed at
/// `floor(canvas.height / 3)` whatever the image height.
pub fn paste_offsets(cols: u32, canvas: &CanvasSpec) -> (u32, u32) {
    let pad_left = canvas.width.saturating_sub(cols) / 2;
    let pad_top = canvas.top_offset();
    (pad_left, pad_top)
}

/// Place `image` on a background-filled canvas of exactly `canvas.width x canvas.height`.
///
/// Any part of `image` that would extend past the canvas edge is dropped.
pub fn add_letterbox_padding(image: &RgbImage, canvas: &CanvasSpec) -> RgbImage {
    let (cols, rows) = image.dimensions();
    let (pad_left, pad_top) = paste_offsets(cols, canvas);

    info!(
        "Adding padding: cols={}, rows={}, pad_left={}, pad_top={}",
        cols, rows, pad_left, pad_top
    );
    info!("Final dimensions: {}x{}", canvas.width, canvas.height);

    let mut padded = RgbImage::from_pixel(canvas.width, canvas.height, canvas.background.to_pixel());
    let copy_cols = cols.min(canvas.width.saturating_sub(pad_left)) as usize;
    let copy_rows = rows.min(canvas.height.saturating_sub(pad_top));
    if copy_cols == 0 {
        return padded;
    }

    // Copy per row using slice copies to minimize per-pixel indexing
    let src = image.as_raw();
    let dst: &mut [u8] = &mut padded;
    let src_stride = cols as usize * 3;
    let dst_stride = canvas.width as usize * 3;
    for row in 0..copy_rows as usize {
        let src_offset = row * src_stride;
        let dst_offset = (row + pad_top as usize) * dst_stride + pad_left as usize * 3;
        dst[dst_offset..dst_offset + copy_cols * 3]
            .copy_from_slice(&src[src_offset..src_offset + copy_cols * 3]);
    }
    padded
}
