use chrono::NaiveDate;
use rust_decimal::Decimal;
use sales_analyzer::models::Sale;
use sales_analyzer::report::{OutputFormat, SalesReport};

/// Helper to create a sale from a `YYYY-MM-DD` date
pub fn make_sale(date: &str, sku: &str, quantity: u32, total_price: Decimal) -> Sale {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let unit_price = if quantity == 0 {
        Decimal::ZERO
    } else {
        total_price / Decimal::from(quantity)
    };
    Sale::new(date, sku, unit_price, quantity, total_price)
}

/// Output of one pipeline run: the report plus both written channels
pub struct RunOutput {
    pub report: SalesReport,
    pub stdout: String,
    pub stderr: String,
}

/// Run the full pipeline over an input string
pub fn run_pipeline(input: &str, format: OutputFormat) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let report =
        sales_analyzer::process_sales(input.as_bytes(), &mut stdout, &mut stderr, format).unwrap();

    RunOutput {
        report,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Build input text from `(date, sku, unit_price, quantity, total_price)` rows
pub fn build_input(rows: &[(&str, &str, &str, &str, &str)]) -> String {
    let mut input = String::new();

    for (date, sku, unit_price, quantity, total_price) in rows {
        input.push_str(&format!(
            "{},{},{},{},{}\n",
            date, sku, unit_price, quantity, total_price
        ));
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_sale() {
        let sale = make_sale("2024-01-15", "A", 4, dec!(10));
        assert_eq!(sale.sku, "A");
        assert_eq!(sale.unit_price, dec!(2.5));
        assert_eq!(sale.month().to_string(), "2024-01");
    }

    #[test]
    fn test_build_input() {
        let input = build_input(&[("2024-01-01", "A", "1.0", "2", "2.0")]);
        assert_eq!(input, "2024-01-01,A,1.0,2,2.0\n");
    }
}
