use image::RgbImage;
use image::codecs::png::PngEncoder;
use std::io::Write;

pub fn write_rgb_png<W: Write>(
    writer: &mut W,
    image: &RgbImage,
) -> Result<(), Box<dyn std::error::Error>> {
    image.write_with_encoder(PngEncoder::new(writer))?;
    Ok(())
}
