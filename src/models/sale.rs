use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::month::MonthKey;

/// One validated sale line
/// `total_price` is taken from the input as-is, it is not recomputed from
/// `unit_price * quantity`
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub date: NaiveDate,
    pub sku: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub total_price: Decimal,
}

impl Sale {
    pub fn new(
        date: NaiveDate,
        sku: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        total_price: Decimal,
    ) -> Self {
        Self {
            date,
            sku: sku.into(),
            unit_price,
            quantity,
            total_price,
        }
    }

    /// Month this sale is reported under
    pub fn month(&self) -> MonthKey {
        MonthKey::from(self.date)
    }
}
