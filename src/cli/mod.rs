//! Command Line Interface (CLI) layer for wallprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the dispatch logic (`runner`) for the batch pipeline and the
//! single-stage `mask` / `compose` commands. It wires user-provided options
//! to the library functionality exposed via `wallprep::api`.
//!
//! If you are embedding wallprep into another application, prefer using
//! the high-level `wallprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
