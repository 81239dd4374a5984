use std::io::{Seek, Write};
use tiff::encoder::{TiffEncoder, colortype};

pub fn write_rgb_tiff<W: Write + Seek>(
    writer: &mut W,
    cols: u32,
    rows: u32,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut encoder = TiffEncoder::new(writer)?;
    encoder.write_image::<colortype::RGB8>(cols, rows, rgb_data)?;
    Ok(())
}
