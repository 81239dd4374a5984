use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported output format for {path:?}: use a .png, .jpg/.jpeg or .tif/.tiff extension")]
    UnsupportedOutput { path: PathBuf },

    #[error(transparent)]
    Wallprep(#[from] wallprep::Error),
}
