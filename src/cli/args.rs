use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wallprep::{CanvasSpec, MaskParams, OutputFormat, PipelineParams, ResampleFilter, Rgb, StageLayout};

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "wallprep", version, about = "wallprep CLI")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// JSON file with pipeline parameters; command-line flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mask and compose every raw input, skipping stages whose output already exists
    Run(RunArgs),
    /// Cover the watermark region of a single image
    Mask(MaskCommand),
    /// Compose a single image onto a wallpaper canvas
    Compose(ComposeCommand),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory holding the raw inputs
    #[arg(long)]
    pub raw_dir: Option<PathBuf>,

    /// Directory for masked intermediates
    #[arg(long)]
    pub cleaned_dir: Option<PathBuf>,

    /// Directory for finished wallpapers
    #[arg(long)]
    pub resized_dir: Option<PathBuf>,

    /// Encoding of the cleaned and resized files (png, jpeg or tiff)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub mask: MaskOpts,

    #[command(flatten)]
    pub canvas: CanvasOpts,
}

#[derive(Args, Debug)]
pub struct MaskCommand {
    /// Path to input image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to save output image; the extension selects the format
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub mask: MaskOpts,
}

#[derive(Args, Debug)]
pub struct ComposeCommand {
    /// Path to input image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to save output image; the extension selects the format
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub canvas: CanvasOpts,
}

#[derive(Args, Debug, Default)]
pub struct MaskOpts {
    /// X coord of rectangle top-left (default 207)
    #[arg(long, allow_negative_numbers = true)]
    pub box_x: Option<i64>,

    /// Y coord of rectangle top-left (default 607)
    #[arg(long, allow_negative_numbers = true)]
    pub box_y: Option<i64>,

    /// Rectangle width (default 230)
    #[arg(long)]
    pub box_w: Option<u32>,

    /// Rectangle height (default 32)
    #[arg(long)]
    pub box_h: Option<u32>,

    /// Fill color as R,G,B (e.g. 255,255,255), #rrggbb or a color name
    #[arg(long)]
    pub fill_color: Option<String>,

    /// Fill with mid gray to see where the rectangle lands
    #[arg(long, default_value_t = false, conflicts_with = "fill_color")]
    pub debug_fill: bool,
}

impl MaskOpts {
    pub fn apply(&self, mask: &mut MaskParams) -> Result<(), AppError> {
        if let Some(x) = self.box_x {
            mask.rect.x = x;
        }
        if let Some(y) = self.box_y {
            mask.rect.y = y;
        }
        if let Some(w) = self.box_w {
            mask.rect.width = w;
        }
        if let Some(h) = self.box_h {
            mask.rect.height = h;
        }
        if let Some(color) = &self.fill_color {
            mask.fill = color.parse::<Rgb>()?;
        }
        if self.debug_fill {
            mask.fill = Rgb::DEBUG_GRAY;
        }
        Ok(())
    }
}

#[derive(Args, Debug, Default)]
pub struct CanvasOpts {
    /// Target wallpaper width in pixels (default 1080)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Target wallpaper height in pixels (default 1920)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Background color (R,G,B, hex or name) for the padding
    #[arg(short = 'b', long)]
    pub bg: Option<String>,

    /// Resampling filter (bilinear, catmull-rom, mitchell, lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,
}

impl CanvasOpts {
    pub fn apply(&self, canvas: &mut CanvasSpec, filter: &mut ResampleFilter) -> Result<(), AppError> {
        if let Some(w) = self.width {
            canvas.width = w;
        }
        if let Some(h) = self.height {
            canvas.height = h;
        }
        if let Some(color) = &self.bg {
            canvas.background = color.parse::<Rgb>()?;
        }
        if let Some(f) = self.filter {
            *filter = f;
        }
        Ok(())
    }
}

impl RunArgs {
    pub fn layout(&self) -> StageLayout {
        let defaults = StageLayout::default();
        StageLayout {
            raw_dir: self.raw_dir.clone().unwrap_or(defaults.raw_dir),
            cleaned_dir: self.cleaned_dir.clone().unwrap_or(defaults.cleaned_dir),
            resized_dir: self.resized_dir.clone().unwrap_or(defaults.resized_dir),
        }
    }

    pub fn apply(&self, params: &mut PipelineParams) -> Result<(), AppError> {
        self.mask.apply(&mut params.mask)?;
        self.canvas.apply(&mut params.canvas, &mut params.filter)?;
        if let Some(format) = self.format {
            params.format = format;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallprep::Rect;

    #[test]
    fn run_defaults_to_asset_layout() {
        let args = CliArgs::try_parse_from(["wallprep", "run"]).unwrap();
        let Command::Run(run) = args.command else {
            panic!("expected run");
        };
        assert_eq!(run.layout(), StageLayout::default());
        let mut params = PipelineParams::default();
        run.apply(&mut params).unwrap();
        assert_eq!(params, PipelineParams::default());
    }

    #[test]
    fn flags_override_params() {
        let args = CliArgs::try_parse_from([
            "wallprep", "run", "--raw-dir", "in", "--box-x", "-3", "--box-w", "10",
            "--fill-color", "0,0,0", "-W", "720", "-H", "1280", "-b", "#ff0000",
            "--filter", "catmull-rom", "--format", "jpeg",
        ])
        .unwrap();
        let Command::Run(run) = args.command else {
            panic!("expected run");
        };
        assert_eq!(run.layout().raw_dir, PathBuf::from("in"));
        let mut params = PipelineParams::default();
        run.apply(&mut params).unwrap();
        assert_eq!(params.mask.rect, Rect::new(-3, 607, 10, 32));
        assert_eq!(params.mask.fill, Rgb::BLACK);
        assert_eq!((params.canvas.width, params.canvas.height), (720, 1280));
        assert_eq!(params.canvas.background, Rgb::new(255, 0, 0));
        assert_eq!(params.filter, ResampleFilter::CatmullRom);
        assert_eq!(params.format, OutputFormat::Jpeg);
    }

    #[test]
    fn malformed_fill_color_is_rejected() {
        let opts = MaskOpts {
            fill_color: Some("255,0".into()),
            ..MaskOpts::default()
        };
        let err = opts.apply(&mut MaskParams::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Wallprep(wallprep::Error::InvalidColorSpec { .. })
        ));
    }

    #[test]
    fn debug_fill_conflicts_with_fill_color() {
        assert!(
            CliArgs::try_parse_from([
                "wallprep", "mask", "-i", "a.png", "-o", "b.png", "--debug-fill",
                "--fill-color", "1,2,3",
            ])
            .is_err()
        );
        let args = CliArgs::try_parse_from([
            "wallprep", "mask", "-i", "a.png", "-o", "b.png", "--debug-fill",
        ])
        .unwrap();
        let Command::Mask(cmd) = args.command else {
            panic!("expected mask");
        };
        let mut mask = MaskParams::default();
        cmd.mask.apply(&mut mask).unwrap();
        assert_eq!(mask.fill, Rgb::DEBUG_GRAY);
    }

    #[test]
    fn compose_requires_input_and_output() {
        assert!(CliArgs::try_parse_from(["wallprep", "compose", "-i", "a.png"]).is_err());
        assert!(
            CliArgs::try_parse_from(["wallprep", "compose", "-i", "a.png", "-o", "b.png"]).is_ok()
        );
    }
}
