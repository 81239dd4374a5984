//! Pipeline stages, their on-disk artifacts, and per-input path derivation.
//!
//! An artifact is "present" iff a file exists at its path. Nothing else about
//! the file (size, content, timestamp) is consulted.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Stage {
    Raw,
    Cleaned,
    Resized,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Raw => Some(Stage::Cleaned),
            Stage::Cleaned => Some(Stage::Resized),
            Stage::Resized => None,
        }
    }

    /// Filename suffix appended to the input stem for derived stages.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Stage::Raw => None,
            Stage::Cleaned => Some("_cleaned"),
            Stage::Resized => Some("_resized"),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Raw => write!(f, "raw"),
            Stage::Cleaned => write!(f, "cleaned"),
            Stage::Resized => write!(f, "resized"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Artifact {
    pub stage: Stage,
    pub path: PathBuf,
}

impl Artifact {
    pub fn is_present(&self) -> bool {
        self.path.exists()
    }
}

/// Directory for each stage's artifacts.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StageLayout {
    pub raw_dir: PathBuf,
    pub cleaned_dir: PathBuf,
    pub resized_dir: PathBuf,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("assets/01raw"),
            cleaned_dir: PathBuf::from("assets/02cleaned"),
            resized_dir: PathBuf::from("assets/03resized"),
        }
    }
}

impl StageLayout {
    pub fn dir(&self, stage: Stage) -> &Path {
        match stage {
            Stage::Raw => &self.raw_dir,
            Stage::Cleaned => &self.cleaned_dir,
            Stage::Resized => &self.resized_dir,
        }
    }

    /// Create the derived-stage output directories if absent.
    pub fn create_output_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.cleaned_dir)?;
        std::fs::create_dir_all(&self.resized_dir)?;
        Ok(())
    }
}

/// One raw input and the artifacts derived from it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PipelineItem {
    pub raw: PathBuf,
    pub cleaned: PathBuf,
    pub resized: PathBuf,
}

impl PipelineItem {
    /// Derive `{stem}_cleaned.{ext}` and `{stem}_resized.{ext}` from the raw input's file stem.
    pub fn derive(raw: &Path, layout: &StageLayout, format: OutputFormat) -> Self {
        let stem = raw
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let derived = |stage: Stage| {
            let suffix = stage.suffix().unwrap_or_default();
            layout
                .dir(stage)
                .join(format!("{}{}.{}", stem, suffix, format.extension()))
        };
        Self {
            raw: raw.to_path_buf(),
            cleaned: derived(Stage::Cleaned),
            resized: derived(Stage::Resized),
        }
    }

    pub fn artifact(&self, stage: Stage) -> Artifact {
        let path = match stage {
            Stage::Raw => &self.raw,
            Stage::Cleaned => &self.cleaned,
            Stage::Resized => &self.resized,
        };
        Artifact {
            stage,
            path: path.clone(),
        }
    }

    /// Display name of the raw input, for logs and reports.
    pub fn name(&self) -> String {
        self.raw
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.raw.display().to_string())
    }
}
