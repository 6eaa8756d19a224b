use anyhow::{Result, bail};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::CheckArgs) -> Result<()> {
    let pipeline = super::load_pipeline(&args.pipeline)?;
    let conversion = pipeline.run_file(&args.input)?;

    println!("[check] {} district(s) converted", conversion.districts.len());
    if cli.verbose > 0 {
        for district in &conversion.districts {
            println!("  {} ({}) tags={}", district.id, district.province, district.tags.join(","));
        }
    }
    if conversion.invalid_coordinates > 0 {
        println!("[check] {} non-finite coordinate(s) replaced with the origin", conversion.invalid_coordinates);
    }

    if !conversion.skipped.is_empty() {
        eprintln!("[check] {} feature(s) skipped:", conversion.skipped.len());
        super::report_skipped(&conversion);
        bail!("[check] {} feature(s) could not be converted", conversion.skipped.len());
    }

    Ok(())
}
