//! Shared types used across wallprep.
//! Includes `Rgb` (with color-string parsing), `Rect`, `CanvasSpec`,
//! `OutputFormat` and `ResampleFilter`.
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An 8-bit RGB color.
///
/// Parses from `"R,G,B"`, `rgb(R,G,B)`, `#rgb`, `#rrggbb` or a CSS color name.
/// Serialized as the `"R,G,B"` string form.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    /// Mid gray, handy for seeing where a mask rectangle lands while tuning it.
    pub const DEBUG_GRAY: Rgb = Rgb([128, 128, 128]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb(self.0)
    }

    fn from_triple(spec: &str, body: &str) -> Result<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::color(
                spec,
                format!("expected 3 channels, got {}", parts.len()),
            ));
        }
        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: i64 = part
                .parse()
                .map_err(|_| Error::color(spec, format!("channel {part:?} is not an integer")))?;
            *slot = u8::try_from(value)
                .map_err(|_| Error::color(spec, format!("channel {value} is outside 0..=255")))?;
        }
        Ok(Rgb(channels))
    }

    fn from_hex(spec: &str, digits: &str) -> Result<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::color(spec, "hex color contains non-hex digits"));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => {
                return Err(Error::color(
                    spec,
                    format!("hex color must have 3 or 6 digits, got {n}"),
                ));
            }
        };
        let mut channels = [0u8; 3];
        for (i, slot) in channels.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16)
                .map_err(|e| Error::color(spec, e))?;
        }
        Ok(Rgb(channels))
    }

    /// CSS/SVG color keywords, case-insensitive.
    fn from_name(spec: &str) -> Result<Self> {
        palette::named::from_str(&spec.to_ascii_lowercase())
            .map(|c| Rgb([c.red, c.green, c.blue]))
            .ok_or_else(|| Error::color(spec, "unknown color name"))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(Error::color(s, "empty color"));
        }
        let lower = spec.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Rgb::from_triple(spec, body)
        } else if spec.contains(',') {
            Rgb::from_triple(spec, spec)
        } else if let Some(digits) = spec.strip_prefix('#') {
            Rgb::from_hex(spec, digits)
        } else {
            Rgb::from_name(spec)
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{},{},{}", r, g, b)
    }
}

/// Axis-aligned rectangle in pixel coordinates, top-left origin.
///
/// The origin may lie outside any particular image; consumers clip.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge, inclusive.
    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }

    /// Bottom edge, inclusive.
    pub fn bottom(&self) -> i64 {
        self.y + i64::from(self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidGeometry {
                what: "rectangle",
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Output wallpaper geometry.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}

impl CanvasSpec {
    /// Height of the bottom region the scaled image is fitted into: `floor(h * 2 / 3)`.
    pub fn region_height(&self) -> u32 {
        // u64 so tall canvases cannot overflow the doubling
        (u64::from(self.height) * 2 / 3) as u32
    }

    /// Row where the scaled image is pasted: `floor(h / 3)`.
    ///
    /// Not derived from `region_height`, so for heights not divisible by 3 the two
    /// need not sum to `height`.
    pub fn top_offset(&self) -> u32 {
        self.height / 3
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.region_height() == 0 {
            return Err(Error::InvalidGeometry {
                what: "canvas",
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg, // Lossy
    Tiff,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Tiff => "tiff",
        }
    }

    /// Infer the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Tiff => write!(f, "TIFF"),
        }
    }
}

/// Convolution filter used when scaling onto the canvas.
///
/// Nearest-neighbour is deliberately absent; wallpapers are always resampled
/// with a smoothing kernel.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn to_filter_type(self) -> fast_image_resize::FilterType {
        match self {
            ResampleFilter::Bilinear => fast_image_resize::FilterType::Bilinear,
            ResampleFilter::CatmullRom => fast_image_resize::FilterType::CatmullRom,
            ResampleFilter::Mitchell => fast_image_resize::FilterType::Mitchell,
            ResampleFilter::Lanczos3 => fast_image_resize::FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
