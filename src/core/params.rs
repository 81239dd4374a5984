use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CanvasSpec, OutputFormat, Rect, ResampleFilter, Rgb};

/// Historical watermark rectangle: top-left (207, 607), 230x32.
pub const DEFAULT_MASK_RECT: Rect = Rect::new(207, 607, 230, 32);
pub const DEFAULT_CANVAS_WIDTH: u32 = 1080;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1920;

/// Where and with what color the watermark is covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    pub rect: Rect,
    pub fill: Rgb,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            rect: DEFAULT_MASK_RECT,
            fill: Rgb::WHITE,
        }
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: Rgb::WHITE,
        }
    }
}

/// Pipeline parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub mask: MaskParams,
    pub canvas: CanvasSpec,
    pub filter: ResampleFilter,
    /// Encoding (and file extension) of the cleaned and resized artifacts
    pub format: OutputFormat,
}

impl PipelineParams {
    /// Load parameters from a JSON file. Omitted fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let params: PipelineParams = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        params.validate()?;
        Ok(params)
    }

    /// Geometry checks shared by every item. Colors are already validated by parsing.
    pub fn validate(&self) -> Result<()> {
        self.mask.rect.validate()?;
        self.canvas.validate()?;
        Ok(())
    }
}
