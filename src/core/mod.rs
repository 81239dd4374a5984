//! Core building blocks: parameters, stage/artifact bookkeeping, and the
//! masking, resize, padding and save primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
pub mod stage;
