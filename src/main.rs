use std::env;
use std::fs::File;
use std::io;

use anyhow::{anyhow, Context, Result};
use sales_analyzer::process_sales;
use sales_analyzer::report::OutputFormat;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() == 2 || args.len() == 3,
        "Usage: {} <sales.txt> [text|json]",
        args.first().map(String::as_str).unwrap_or("sales-analyzer")
    );

    let filename = &args[1];
    let format = match args.get(2) {
        Some(arg) => arg.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        None => OutputFormat::default(),
    };

    log::debug!("Reading sales from '{}' ({:?} output)", filename, format);

    let file = File::open(filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    process_sales(file, io::stdout(), io::stderr(), format)
        .with_context(|| format!("Failed to analyze sales data from '{}'", filename))?;

    Ok(())
}
