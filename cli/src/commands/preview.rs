use anyhow::Result;
use lankamap::{ensure_parent_dir_exists, require_writable, write_preview_to_svg_file};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::PreviewArgs) -> Result<()> {
    require_writable(&args.output, args.force)?;

    let pipeline = super::load_pipeline(&args.pipeline)?;
    let conversion = pipeline.run_file(&args.input)?;

    ensure_parent_dir_exists(&args.output)?;
    write_preview_to_svg_file(&args.output, &conversion.districts, &pipeline.config().canvas, &conversion.bounds)?;

    println!("[preview] rendered {} district(s) to {}", conversion.districts.len(), args.output.display());
    Ok(())
}
