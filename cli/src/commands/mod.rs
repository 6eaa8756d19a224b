pub mod check;
pub mod convert;
pub mod preview;

use anyhow::Result;
use lankamap::{Config, Conversion, Pipeline};
use log::info;

use crate::cli::PipelineArgs;

/// Build the pipeline from the config file (or built-in data) and command-line overrides.
pub fn load_pipeline(args: &PipelineArgs) -> Result<Pipeline> {
    let mut config = match &args.config {
        Some(path) => {
            info!("[config] loading {}", path.display());
            Config::from_file(path)?
        }
        None => Config::builtin()?,
    };

    if args.no_simplify { config.canvas.simplify = false }
    if let Some(tolerance) = args.tolerance { config.canvas.tolerance = tolerance }

    Pipeline::new(config)
}

/// Print the skip list to stderr, one feature per line.
pub fn report_skipped(conversion: &Conversion) {
    for skipped in &conversion.skipped {
        eprintln!("  skipped feature {}: {}", skipped.index, skipped.reason);
    }
}
