use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::analyzer;
use crate::error::Result;
use crate::models::{ItemStats, MonthKey, Sale};

/// How a report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// The five reports computed over one set of sales
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub total_sales: Decimal,
    pub monthly_sales: BTreeMap<MonthKey, Decimal>,
    pub most_popular_item_per_month: BTreeMap<MonthKey, Option<String>>,
    pub top_revenue_item_per_month: BTreeMap<MonthKey, Option<String>>,
    pub most_popular_item_stats: Option<ItemStats>,
}

impl SalesReport {
    /// Run every report over `sales`
    pub fn from_sales(sales: &[Sale]) -> Self {
        log::debug!("Building reports over {} sales", sales.len());
        Self {
            total_sales: analyzer::total_sales(sales),
            monthly_sales: analyzer::monthly_sales(sales),
            most_popular_item_per_month: analyzer::most_popular_item_per_month(sales),
            top_revenue_item_per_month: analyzer::top_revenue_item_per_month(sales),
            most_popular_item_stats: analyzer::most_popular_item_stats(sales),
        }
    }

    /// Write the report in the requested format
    pub fn write<W: Write>(&self, writer: W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    /// Write the human readable report, one section after another
    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "Total Sales: {}", self.total_sales)?;

        writeln!(writer, "Monthly Sales:")?;
        write_month_lines(&mut writer, &self.monthly_sales)?;

        writeln!(writer, "Most Popular Item Per Month:")?;
        write_month_lines(&mut writer, &with_placeholder(&self.most_popular_item_per_month))?;

        writeln!(writer, "Revenue Generating Items Per Month:")?;
        write_month_lines(&mut writer, &with_placeholder(&self.top_revenue_item_per_month))?;

        writeln!(writer, "Most Popular Item Stats:")?;
        match &self.most_popular_item_stats {
            Some(stats) => {
                writeln!(writer, "Item: {}", stats.sku)?;
                writeln!(writer, "Min Orders: {}", stats.min_quantity)?;
                writeln!(writer, "Max Orders: {}", stats.max_quantity)?;
                writeln!(writer, "Avg Orders: {:?}", stats.avg_quantity)?;
            }
            None => writeln!(writer, "Item: none")?,
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the report as a single JSON document
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn with_placeholder(winners: &BTreeMap<MonthKey, Option<String>>) -> BTreeMap<MonthKey, &str> {
    winners
        .iter()
        .map(|(month, sku)| (*month, sku.as_deref().unwrap_or("none")))
        .collect()
}

fn write_month_lines<W: Write, V: Display>(
    writer: &mut W,
    months: &BTreeMap<MonthKey, V>,
) -> Result<()> {
    for (month, value) in months {
        writeln!(writer, "{}: {}", month, value)?;
    }
    Ok(())
}
