use serde::Serialize;

/// Order quantity statistics for a single sku
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStats {
    pub sku: String,
    pub total_quantity: u64,
    pub order_count: usize,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub avg_quantity: f64,
}

impl ItemStats {
    /// Build stats from the per-transaction quantities of `sku`
    /// Returns None when there are no quantities to summarize
    pub fn from_quantities(sku: impl Into<String>, quantities: &[u32]) -> Option<Self> {
        let min_quantity = *quantities.iter().min()?;
        let max_quantity = *quantities.iter().max()?;
        let total_quantity = quantities
            .iter()
            .fold(0u64, |total, &q| total.saturating_add(u64::from(q)));

        Some(Self {
            sku: sku.into(),
            total_quantity,
            order_count: quantities.len(),
            min_quantity,
            max_quantity,
            avg_quantity: total_quantity as f64 / quantities.len() as f64,
        })
    }
}
