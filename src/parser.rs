use std::fmt;
use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::Result;
use crate::models::Sale;

/// Number of comma separated fields in a sale line
pub const FIELD_COUNT: usize = 5;

/// Accepted format of the date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a single input line was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("invalid data format: {0}")]
    InvalidFormat(String),

    #[error("invalid date format: {0:?}")]
    InvalidDate(String),

    #[error("invalid numeric value for {field}: {value:?}")]
    InvalidNumeric { field: &'static str, value: String },
}

/// A skipped input line together with the reason it was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// 1-based line number in the input
    pub line: u64,
    pub content: String,
    pub error: LineError,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.error, self.content)
    }
}

/// Result of parsing a whole input: accepted sales in input order and the
/// lines that were skipped
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSales {
    pub sales: Vec<Sale>,
    pub rejections: Vec<Rejection>,
}

impl ParsedSales {
    fn accept(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    fn reject(&mut self, line: u64, content: String, error: LineError) {
        log::debug!("Skipping line {}: {}", line, error);
        self.rejections.push(Rejection {
            line,
            content,
            error,
        });
    }
}

/// Parse sale records from a byte source
///
/// Malformed lines are collected as rejections and never stop the run. Only a
/// failure of the source itself is returned as an error.
pub fn parse_sales<R: Read>(reader: R) -> Result<ParsedSales> {
    // No quoting: embedded commas are not supported, every comma splits a field
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut parsed = ParsedSales::default();

    for result in csv_reader.records() {
        match result {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                match parse_record(&record) {
                    Ok(sale) => parsed.accept(sale),
                    Err(error) => {
                        let content = record.iter().collect::<Vec<_>>().join(",");
                        parsed.reject(line, content, error);
                    }
                }
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                // e.g. invalid UTF-8, the line is unusable but the source is fine
                let line = e.position().map_or(0, |p| p.line());
                parsed.reject(line, String::new(), LineError::InvalidFormat(e.to_string()));
            }
        }
    }

    log::debug!(
        "Parsed {} sales, rejected {} lines",
        parsed.sales.len(),
        parsed.rejections.len()
    );

    Ok(parsed)
}

/// Parse sale records from lines already held in memory
/// Empty lines are skipped without a rejection, matching `parse_sales`
pub fn parse_lines<I, S>(lines: I) -> ParsedSales
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedSales::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(sale) => parsed.accept(sale),
            Err(error) => parsed.reject(idx as u64 + 1, line.to_string(), error),
        }
    }

    parsed
}

/// Parse a single `date,sku,unit_price,quantity,total_price` line
pub fn parse_line(line: &str) -> std::result::Result<Sale, LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    parse_fields(&fields)
}

fn parse_record(record: &StringRecord) -> std::result::Result<Sale, LineError> {
    let fields: Vec<&str> = record.iter().collect();
    parse_fields(&fields)
}

fn parse_fields(fields: &[&str]) -> std::result::Result<Sale, LineError> {
    let [date, sku, unit_price, quantity, total_price] = fields else {
        return Err(LineError::InvalidFormat(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    };

    let sku = sku.trim();
    if sku.is_empty() {
        return Err(LineError::InvalidFormat("empty sku".to_string()));
    }

    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| LineError::InvalidDate(date.to_string()))?;
    let unit_price = parse_price("unit_price", unit_price)?;
    let quantity = parse_number::<u32>("quantity", quantity)?;
    let total_price = parse_price("total_price", total_price)?;

    Ok(Sale::new(date, sku, unit_price, quantity, total_price))
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> std::result::Result<T, LineError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| LineError::InvalidNumeric {
            field,
            value: value.to_string(),
        })
}

/// Prices must be non-negative
fn parse_price(field: &'static str, value: &str) -> std::result::Result<Decimal, LineError> {
    let price: Decimal = parse_number(field, value)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(LineError::InvalidNumeric {
            field,
            value: value.to_string(),
        });
    }
    Ok(price)
}
