use jpeg_encoder::{ColorType, Encoder};
use std::io::Write;

pub const JPEG_QUALITY: u8 = 95;

pub fn write_rgb_jpeg<W: Write>(
    writer: &mut W,
    cols: u32,
    rows: u32,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let (cols, rows) = match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => (c, r),
        _ => return Err(format!("{}x{} exceeds JPEG's 65535 pixel limit", cols, rows).into()),
    };
    let encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder.encode(rgb_data, cols, rows, ColorType::Rgb)?;
    Ok(())
}
