use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use donorstream::streams::ContributionFileStream;
use donorstream::tasks::ReportPipeline;

/// Streams a pipe-delimited contributions file into two median reports:
/// one line per processable record grouped by (committee, zip prefix),
/// and one line per (committee, transaction date) written sorted after
/// the input is exhausted.
#[derive(Parser)]
#[command(name = "donorstream", version, about)]
struct Cli {
    /// Input contributions file (itcont.txt format).
    input: PathBuf,

    /// Output path for the streaming zip report.
    zip_output: PathBuf,

    /// Output path for the sorted date report.
    date_output: PathBuf,

    /// Records between progress log lines.
    #[arg(long, default_value_t = 100_000)]
    progress_interval: u64,

    /// Stop after this many records.
    #[arg(long)]
    max_records: Option<u64>,

    /// Write run statistics as JSON to this path.
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stream = ContributionFileStream::open(&cli.input)
        .with_context(|| format!("opening {}", cli.input.display()))?;
    let zip_sink = BufWriter::new(
        File::create(&cli.zip_output)
            .with_context(|| format!("creating {}", cli.zip_output.display()))?,
    );
    let date_sink = BufWriter::new(
        File::create(&cli.date_output)
            .with_context(|| format!("creating {}", cli.date_output.display()))?,
    );

    let mut pipeline = ReportPipeline::new(
        Box::new(stream),
        Box::new(zip_sink),
        Box::new(date_sink),
        cli.progress_interval,
        cli.max_records,
    )?;
    let stats = pipeline.run()?;

    if let Some(path) = &cli.stats {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &stats)?;
    }

    info!(
        "processed {} records ({} malformed) in {:.3}s: {} zip groups, {} date groups",
        stats.records_seen,
        stats.malformed_lines,
        stats.elapsed_seconds,
        stats.zip_groups,
        stats.date_groups,
    );
    Ok(())
}
