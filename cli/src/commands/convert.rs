use anyhow::Result;
use lankamap::{Format, ensure_parent_dir_exists, require_writable, write_districts_to_file};

use crate::cli::OutputFormat;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ConvertArgs) -> Result<()> {
    require_writable(&args.output, args.force)?;

    let format = match args.format {
        Some(OutputFormat::Json) => Format::Json,
        Some(OutputFormat::Ts) => Format::TypeScript,
        None => Format::from_path(&args.output),
    };

    let pipeline = super::load_pipeline(&args.pipeline)?;
    let conversion = pipeline.run_file(&args.input)?;

    ensure_parent_dir_exists(&args.output)?;
    write_districts_to_file(&args.output, &conversion.districts, format)?;

    println!("[convert] wrote {} district(s) to {}", conversion.districts.len(), args.output.display());
    if !conversion.skipped.is_empty() {
        eprintln!("[convert] {} feature(s) skipped:", conversion.skipped.len());
        super::report_skipped(&conversion);
    }

    Ok(())
}
