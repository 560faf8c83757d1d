use anyhow::Context;
use clap::Parser;
use sp500_wma::services::report_service::DEFAULT_OUTPUT_FILE;
use sp500_wma::{init_logger, pipeline};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sp500-wma")]
#[command(about = "Monthly volume-weighted averages and 4-month WMA extremes for S&P 500 history")]
struct Cli {
    /// CSV file with historical prices; prompted for when omitted
    input: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    let cli = Cli::parse();
    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_input()?,
    };

    let summary = pipeline::run(&input, &cli.output)?;

    println!(
        "Best month: {}, {:.2}",
        summary.extremes.best.month.output_label(),
        summary.extremes.best.value
    );
    println!(
        "Worst month: {}, {:.2}",
        summary.extremes.worst.month.output_label(),
        summary.extremes.worst.value
    );
    println!("Report written to {}", cli.output.display());

    Ok(())
}

fn prompt_for_input() -> anyhow::Result<PathBuf> {
    print!("Enter the CSV file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read file name from stdin")?;
    Ok(PathBuf::from(line.trim()))
}
