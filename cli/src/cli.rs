use std::path::PathBuf;

/// District map generator (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "lankamap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert district boundary GeoJSON into the static district artifact
    Convert(ConvertArgs),

    /// Render the converted districts into a standalone SVG map
    Preview(PreviewArgs),

    /// Run the conversion and report skipped features without writing anything
    Check(CheckArgs),
}

/// Options shared by every command that runs the pipeline.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// Reference tables and canvas settings (TOML), defaults to the built-in district data
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Keep every vertex instead of simplifying rings
    #[arg(long)]
    pub no_simplify: bool,

    /// Simplification tolerance in canvas pixels
    #[arg(long)]
    pub tolerance: Option<f64>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum OutputFormat { Json, Ts }

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Input GeoJSON FeatureCollection of district boundaries
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output artifact file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Artifact format, inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// Input GeoJSON FeatureCollection of district boundaries
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output SVG file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Input GeoJSON FeatureCollection of district boundaries
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}
