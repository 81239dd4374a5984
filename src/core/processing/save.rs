use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_rgb_png;
use crate::io::writers::tiff::write_rgb_tiff;
use crate::types::OutputFormat;

/// Encode `image` to `output`.
///
/// The bytes go to a temporary file in the destination directory which is then
/// renamed over `output`, so `output` either does not exist or is complete.
pub fn save_image(image: &RgbImage, output: &Path, format: OutputFormat) -> Result<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let tmp = tempfile::Builder::new()
        .prefix(".wallprep-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| Error::encode(output, e))?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        let (cols, rows) = image.dimensions();
        match format {
            OutputFormat::Png => write_rgb_png(&mut writer, image),
            OutputFormat::Jpeg => write_rgb_jpeg(&mut writer, cols, rows, image.as_raw()),
            OutputFormat::Tiff => write_rgb_tiff(&mut writer, cols, rows, image.as_raw()),
        }
        .map_err(|e| Error::encode(output, e))?;
        writer.flush().map_err(|e| Error::encode(output, e))?;
    }

    tmp.persist(output).map_err(|e| Error::encode(output, e))?;
    info!("Saved {} {}x{} to {:?}", format, image.width(), image.height(), output);
    Ok(())
}
