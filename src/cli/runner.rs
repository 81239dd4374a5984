use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wallprep::{OutputFormat, PipelineParams, compose_file, cover_file, process_directory};

use super::args::{CliArgs, Command, ComposeCommand, MaskCommand, RunArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn output_format(output: &Path) -> Result<OutputFormat, AppError> {
    OutputFormat::from_path(output).ok_or_else(|| AppError::UnsupportedOutput {
        path: output.to_path_buf(),
    })
}

fn run_batch(args: RunArgs, mut params: PipelineParams) -> Result<(), AppError> {
    args.apply(&mut params)?;
    let layout = args.layout();

    let report = process_directory(&layout, &params)?;
    if report.errors > 0 {
        warn!(
            "{} item(s) failed; they will be retried on the next run",
            report.errors
        );
    }

    if let Some(path) = &args.report {
        report.write_json(path)?;
        info!("Wrote run report to {:?}", path);
    }
    Ok(())
}

fn run_mask(cmd: MaskCommand, mut params: PipelineParams) -> Result<(), AppError> {
    cmd.mask.apply(&mut params.mask)?;
    let format = output_format(&cmd.output)?;
    cover_file(&cmd.input, &cmd.output, &params.mask, format)?;
    info!(
        "Saved cleaned image to {:?}. Adjust --box-x, --box-y, --box-w, --box-h to fine-tune.",
        cmd.output
    );
    Ok(())
}

fn run_compose(cmd: ComposeCommand, mut params: PipelineParams) -> Result<(), AppError> {
    cmd.canvas.apply(&mut params.canvas, &mut params.filter)?;
    let format = output_format(&cmd.output)?;
    compose_file(&cmd.input, &cmd.output, &params.canvas, params.filter, format)?;
    info!("Saved wallpaper to {:?}", cmd.output);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = match &args.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            PipelineParams::from_json_file(path)?
        }
        None => PipelineParams::default(),
    };

    match args.command {
        Command::Run(run_args) => run_batch(run_args, params)?,
        Command::Mask(cmd) => run_mask(cmd, params)?,
        Command::Compose(cmd) => run_compose(cmd, params)?,
    }

    Ok(())
}
