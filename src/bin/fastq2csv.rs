use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use fastq2csv::{convert_path, csv_output_path};

#[derive(Parser, Debug)]
#[command(name = "fastq2csv", version, about = "Convert a FASTQ file to CSV")]
struct Cli {
    /// Source FASTQ file; the path must contain `.fq` (plain or .gz)
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.input.to_string_lossy().contains(".fq") {
        bail!("must input a fastq file: '{}'", cli.input.display());
    }
    let output = csv_output_path(&cli.input);

    let written = convert_path(&cli.input, &output)?;
    log::info!(
        "{}: wrote {written} records to {}",
        cli.input.display(),
        output.display()
    );
    Ok(())
}
