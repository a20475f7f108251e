pub mod analyzer;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;

use std::io::{Read, Write};

use error::Result;
use parser::Rejection;
use report::{OutputFormat, SalesReport};

/// Parse sales from `reader`, write one diagnostic per rejected line to
/// `diagnostics` and the reports to `writer`
///
/// The whole input is parsed before anything is written, so a read failure
/// produces no partial report.
pub fn process_sales<R: Read, W: Write, D: Write>(
    reader: R,
    writer: W,
    mut diagnostics: D,
    format: OutputFormat,
) -> Result<SalesReport> {
    let parsed = parser::parse_sales(reader)?;

    for rejection in &parsed.rejections {
        writeln!(diagnostics, "Warning: {}", rejection)?;
    }
    diagnostics.flush()?;

    let report = SalesReport::from_sales(&parsed.sales);
    report.write(writer, format)?;

    Ok(report)
}

/// Compute every report from raw input lines
/// Entry point for callers that already hold the input in memory
pub fn analyze_lines<I, S>(lines: I) -> (SalesReport, Vec<Rejection>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = parser::parse_lines(lines);
    (SalesReport::from_sales(&parsed.sales), parsed.rejections)
}
