use anyhow::{Context, Result};
use clap::Parser;
use marching_squares_reference::{Chart, ChartConfig};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};
use tracing::{Level, debug};

/// Print the 16-tile marching squares reference chart.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Config {
    /// YAML chart configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the chart here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .without_time()
        .init();

    let chart_config = match &config.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    debug!("Chart config: {chart_config:?}");

    let chart = Chart::new(chart_config)?;
    match &config.output {
        Some(path) => {
            debug!("Writing chart to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            chart.write_all(&mut BufWriter::new(file))
        }
        None => chart.write_all(&mut io::stdout().lock()),
    }
}
