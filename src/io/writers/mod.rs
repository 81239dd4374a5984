//! Encoders for the persisted stage artifacts.
pub mod jpeg;
pub mod png;
pub mod tiff;
