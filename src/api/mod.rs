//! High-level, ergonomic library API: single-file masking and composition, and
//! the staged batch orchestrator that walks a raw directory through
//! Raw -> Cleaned -> Resized, skipping any stage whose artifact already exists.
//! Prefer these entrypoints over the low-level processing modules.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::{MaskParams, PipelineParams};
use crate::core::processing::mask::cover;
use crate::core::processing::pipeline::compose;
use crate::core::processing::save::save_image;
use crate::core::stage::{PipelineItem, Stage, StageLayout};
use crate::error::{Error, Result};
use crate::io::decode_rgb;
use crate::types::{CanvasSpec, OutputFormat, ResampleFilter};

/// What happened to one stage of one item during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    /// The artifact was produced in this run
    Computed,
    /// The artifact already existed
    Skipped,
    Failed { error: String },
    /// An earlier stage failed, so this one was not attempted
    NotReached,
}

impl StageOutcome {
    fn from_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => StageOutcome::Computed,
            Err(e) => StageOutcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Per-item result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub input: PathBuf,
    pub cleaned: StageOutcome,
    pub resized: StageOutcome,
}

impl ItemReport {
    pub fn failed(&self) -> bool {
        matches!(self.cleaned, StageOutcome::Failed { .. })
            || matches!(self.resized, StageOutcome::Failed { .. })
    }

    pub fn did_work(&self) -> bool {
        self.cleaned == StageOutcome::Computed || self.resized == StageOutcome::Computed
    }
}

/// Batch processing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Items that computed at least one stage without failing
    pub processed: usize,
    /// Items that needed no work, plus ignored entries and colliding inputs
    pub skipped: usize,
    /// Items with a failed stage
    pub errors: usize,
    pub items: Vec<ItemReport>,
    /// Raw inputs whose derived paths were already claimed by an earlier input
    pub collisions: Vec<PathBuf>,
}

impl BatchReport {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            processed: 0,
            skipped: 0,
            errors: 0,
            items: Vec::new(),
            collisions: Vec::new(),
        }
    }

    fn record(&mut self, item: ItemReport) {
        if item.failed() {
            self.errors += 1;
        } else if item.did_work() {
            self.processed += 1;
        } else {
            self.skipped += 1;
        }
        self.items.push(item);
    }

    /// Number of stage transforms performed (cover or compose) in the run.
    pub fn transforms(&self) -> usize {
        self.items
            .iter()
            .map(|i| {
                usize::from(i.cleaned == StageOutcome::Computed)
                    + usize::from(i.resized == StageOutcome::Computed)
            })
            .sum()
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)
            .map_err(|e| Error::encode(path, e))
    }
}

/// Raw directory contents split into pipeline inputs and everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    /// Regular files with an extension, sorted by file name
    pub inputs: Vec<PathBuf>,
    pub ignored: Vec<PathBuf>,
    /// Directory entries that could not be read at all
    pub unreadable: usize,
}

/// List candidate raw inputs in `raw_dir`: regular files whose name has an extension.
///
/// Only failing to open the directory itself is an error.
pub fn iterate_raw_inputs(raw_dir: &Path) -> Result<RawInputs> {
    let entries = fs::read_dir(raw_dir)?.map(|entry| entry.map(|e| e.path()));
    Ok(classify_entries(entries))
}

fn classify_entries<I>(entries: I) -> RawInputs
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut listing = RawInputs::default();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                listing.unreadable += 1;
                continue;
            }
        };
        if path.is_file() && path.extension().is_some_and(|e| !e.is_empty()) {
            listing.inputs.push(path);
        } else {
            listing.ignored.push(path);
        }
    }
    listing.inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    listing.ignored.sort();
    listing
}

/// Derive a `PipelineItem` per input. An input whose derived paths were already
/// claimed by an earlier input is returned separately instead.
pub fn plan_items(
    inputs: &[PathBuf],
    layout: &StageLayout,
    format: OutputFormat,
) -> (Vec<PipelineItem>, Vec<PathBuf>) {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut items = Vec::with_capacity(inputs.len());
    let mut collisions = Vec::new();
    for input in inputs {
        let item = PipelineItem::derive(input, layout, format);
        if claimed.contains(&item.cleaned) || claimed.contains(&item.resized) {
            collisions.push(input.clone());
            continue;
        }
        claimed.insert(item.cleaned.clone());
        claimed.insert(item.resized.clone());
        items.push(item);
    }
    (items, collisions)
}

fn clean_stage(item: &PipelineItem, mask: &MaskParams, format: OutputFormat) -> Result<RgbImage> {
    let raw = decode_rgb(&item.raw)?;
    let cleaned = cover(&raw, &mask.rect, mask.fill);
    save_image(&cleaned, &item.cleaned, format)?;
    Ok(cleaned)
}

fn resize_stage(
    item: &PipelineItem,
    cleaned: Option<RgbImage>,
    params: &PipelineParams,
) -> Result<()> {
    let cleaned = match cleaned {
        Some(image) => image,
        None => decode_rgb(&item.cleaned)?,
    };
    let wallpaper = compose(&cleaned, &params.canvas, params.filter)?;
    save_image(&wallpaper, &item.resized, params.format)
}

/// Drive one item from Raw to Resized.
///
/// Each stage runs only if its artifact is absent. A failure is recorded in the
/// report and stops this item; it is never returned as an error.
pub fn process_item(item: &PipelineItem, params: &PipelineParams) -> ItemReport {
    let name = item.name();
    let mut report = ItemReport {
        input: item.raw.clone(),
        cleaned: StageOutcome::NotReached,
        resized: StageOutcome::NotReached,
    };

    let mut cleaned_image = None;
    if item.artifact(Stage::Cleaned).is_present() {
        info!("Skipping {}: already cleaned.", name);
        report.cleaned = StageOutcome::Skipped;
    } else {
        info!("Processing watermark removal for {}...", name);
        let result = clean_stage(item, &params.mask, params.format);
        report.cleaned = StageOutcome::from_result(&result);
        match result {
            Ok(image) => {
                info!("Watermark removed and saved to {:?}", item.cleaned);
                cleaned_image = Some(image);
            }
            Err(e) => {
                warn!("Error cleaning {}: {}", name, e);
                return report;
            }
        }
    }

    if item.artifact(Stage::Resized).is_present() {
        info!("Skipping {}: already resized.", name);
        report.resized = StageOutcome::Skipped;
    } else {
        info!("Resizing {}...", name);
        let result = resize_stage(item, cleaned_image, params);
        report.resized = StageOutcome::from_result(&result);
        match result {
            Ok(()) => info!("Resized image saved to {:?}", item.resized),
            Err(e) => warn!("Error resizing {}: {}", name, e),
        }
    }

    report
}

/// Run every raw input in `layout.raw_dir` through the pipeline.
///
/// Parameter and directory errors abort before any item is touched; per-item
/// failures are collected in the report and the run continues.
pub fn process_directory(layout: &StageLayout, params: &PipelineParams) -> Result<BatchReport> {
    params.validate()?;

    let listing = iterate_raw_inputs(&layout.raw_dir)?;
    layout.create_output_dirs()?;

    info!("Starting batch processing from directory: {:?}", layout.raw_dir);
    info!(
        "Output directories: {:?}, {:?}",
        layout.cleaned_dir, layout.resized_dir
    );

    let mut report = BatchReport::new();
    for path in &listing.ignored {
        info!("Skipping non-input entry: {:?}", path);
        report.skipped += 1;
    }
    report.skipped += listing.unreadable;

    let (items, collisions) = plan_items(&listing.inputs, layout, params.format);
    for path in &collisions {
        warn!(
            "Skipping {:?}: its output names are already used by another input with the same stem",
            path
        );
        report.skipped += 1;
    }
    report.collisions = collisions;

    for item in &items {
        info!("Starting processing for {}...", item.name());
        report.record(process_item(item, params));
    }

    report.finished_at = Utc::now();
    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    Ok(report)
}

/// Cover the watermark region of a single image and write the result.
pub fn cover_file(
    input: &Path,
    output: &Path,
    mask: &MaskParams,
    format: OutputFormat,
) -> Result<()> {
    mask.rect.validate()?;
    let raw = decode_rgb(input)?;
    let cleaned = cover(&raw, &mask.rect, mask.fill);
    save_image(&cleaned, output, format)
}

/// Compose a single image onto a wallpaper canvas and write the result.
pub fn compose_file(
    input: &Path,
    output: &Path,
    canvas: &CanvasSpec,
    filter: ResampleFilter,
    format: OutputFormat,
) -> Result<()> {
    canvas.validate()?;
    let image = decode_rgb(input)?;
    let wallpaper = compose(&image, canvas, filter)?;
    save_image(&wallpaper, output, format)
}
