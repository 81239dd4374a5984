#![doc = r#"
wallprep — batch wallpaper preparation.

Takes raw wallpaper candidates, covers a fixed watermark rectangle, and recomposes
each image onto a fixed-size canvas: the image is scaled (aspect preserved) into the
bottom two-thirds and the top third is filled with a background color. It powers the
`wallprep` CLI and can be embedded in your own Rust applications.

Stages
------
Every raw input moves through `Raw -> Cleaned -> Resized`. Each derived stage is
persisted as a file (`{stem}_cleaned.{ext}`, `{stem}_resized.{ext}`) and a stage is
skipped whenever its file already exists, so re-running a batch only does the work
that is missing. File presence is the only cache signal: changing parameters does
not invalidate existing artifacts.

Compose a single image in memory
--------------------------------
```rust
use wallprep::{compose, CanvasSpec, ResampleFilter, Rgb};

fn main() -> wallprep::Result<()> {
    let source = image::RgbImage::from_pixel(800, 600, image::Rgb([200, 30, 30]));
    let canvas = CanvasSpec { width: 1080, height: 1920, background: Rgb::WHITE };

    let wallpaper = compose(&source, &canvas, ResampleFilter::Lanczos3)?;
    assert_eq!(wallpaper.dimensions(), (1080, 1920));
    Ok(())
}
```

Cover a watermark
-----------------
```rust
use wallprep::{cover, Rect, Rgb};

let source = image::RgbImage::new(1000, 1000);
let cleaned = cover(&source, &Rect::new(207, 607, 230, 32), Rgb::WHITE);
assert_eq!(cleaned.get_pixel(437, 639).0, [255, 255, 255]);
```

Batch helpers
-------------
```rust,no_run
use wallprep::{process_directory, PipelineParams, StageLayout};

fn main() -> wallprep::Result<()> {
    let report = process_directory(&StageLayout::default(), &PipelineParams::default())?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `wallprep::Result<T>`. Configuration problems
(`Error::InvalidColorSpec`, `Error::InvalidGeometry`, `Error::Config`) abort a batch
before any file is touched; decode and encode failures only affect the item they
occur on and show up in the `BatchReport`.

Useful modules
--------------
- [`api`] — single-file helpers and the batch orchestrator.
- [`types`] — `Rgb`, `Rect`, `CanvasSpec`, `OutputFormat`, `ResampleFilter`.
- [`core`] — parameters, stage bookkeeping, and the transform primitives.
- [`io`] — decoding and artifact encoders.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{MaskParams, PipelineParams};
pub use crate::core::stage::{Artifact, PipelineItem, Stage, StageLayout};
pub use error::{Error, Result};
pub use types::{CanvasSpec, OutputFormat, Rect, ResampleFilter, Rgb};

// Transforms
pub use crate::core::processing::mask::cover;
pub use crate::core::processing::pipeline::compose;

// High-level API re-exports
pub use api::{
    BatchReport, ItemReport, StageOutcome, compose_file, cover_file, iterate_raw_inputs,
    plan_items, process_directory, process_item,
};
