//! Report computations over a parsed set of sales.
//!
//! Every report is a pure function of `&[Sale]` and builds its own grouping
//! from scratch, so reports can be computed in any order or on their own.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ItemStats, MonthKey, Sale};

/// Amount that can be accumulated without panicking
/// Sums saturate at the type's maximum value
trait Amount: Copy + Default + PartialOrd {
    fn accumulate(self, other: Self) -> Self;
}

impl Amount for u64 {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Amount for Decimal {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// Value stored for `key`, inserting a default entry at the end when missing
/// Entries stay in the order their keys were first seen
fn entry_in_order<K: PartialEq, V: Default>(entries: &mut Vec<(K, V)>, key: K) -> &mut V {
    let idx = match entries.iter().position(|(k, _)| *k == key) {
        Some(idx) => idx,
        None => {
            entries.push((key, V::default()));
            entries.len() - 1
        }
    };
    &mut entries[idx].1
}

/// Walk `entries` in order and keep the first one whose score is strictly
/// greater than the running maximum, which starts at `floor`.
/// Ties keep the earlier leader; nothing above `floor` means no leader.
fn strict_leader<T, S, I>(entries: I, floor: S) -> Option<T>
where
    I: IntoIterator<Item = (T, S)>,
    S: PartialOrd,
{
    entries
        .into_iter()
        .fold((None, floor), |(leader, max), (item, score)| {
            if score > max {
                (Some(item), score)
            } else {
                (leader, max)
            }
        })
        .0
}

/// Group by month then sku, summing `measure`, and pick each month's leader
fn leader_per_month<V, F>(sales: &[Sale], measure: F) -> BTreeMap<MonthKey, Option<String>>
where
    V: Amount,
    F: Fn(&Sale) -> V,
{
    let mut by_month: BTreeMap<MonthKey, Vec<(&str, V)>> = BTreeMap::new();

    for sale in sales {
        let items = by_month.entry(sale.month()).or_default();
        let total = entry_in_order(items, sale.sku.as_str());
        *total = total.accumulate(measure(sale));
    }

    by_month
        .into_iter()
        .map(|(month, items)| {
            let leader = strict_leader(items, V::default());
            (month, leader.map(str::to_owned))
        })
        .collect()
}

/// Sum of `total_price` over all sales, zero for no sales
pub fn total_sales(sales: &[Sale]) -> Decimal {
    sales
        .iter()
        .fold(Decimal::ZERO, |total, sale| total.accumulate(sale.total_price))
}

/// Revenue per month. Months without sales are absent.
pub fn monthly_sales(sales: &[Sale]) -> BTreeMap<MonthKey, Decimal> {
    sales.iter().fold(BTreeMap::new(), |mut months, sale| {
        let total = months.entry(sale.month()).or_insert(Decimal::ZERO);
        *total = total.accumulate(sale.total_price);
        months
    })
}

/// Sku with the greatest total quantity in each month
///
/// A month where no sku sold more than zero units maps to `None`.
pub fn most_popular_item_per_month(sales: &[Sale]) -> BTreeMap<MonthKey, Option<String>> {
    leader_per_month(sales, |sale| u64::from(sale.quantity))
}

/// Sku with the greatest total revenue in each month
///
/// A month where no sku earned more than zero maps to `None`.
pub fn top_revenue_item_per_month(sales: &[Sale]) -> BTreeMap<MonthKey, Option<String>> {
    leader_per_month(sales, |sale| sale.total_price)
}

/// Order quantity statistics for the sku with the greatest total quantity
/// over the whole input, or `None` if no sku sold more than zero units
pub fn most_popular_item_stats(sales: &[Sale]) -> Option<ItemStats> {
    let mut orders: Vec<(&str, Vec<u32>)> = Vec::new();
    for sale in sales {
        entry_in_order(&mut orders, sale.sku.as_str()).push(sale.quantity);
    }

    let scored = orders.into_iter().map(|(sku, quantities)| {
        let total = quantities
            .iter()
            .fold(0u64, |total, &q| total.accumulate(u64::from(q)));
        ((sku, quantities), total)
    });

    let (sku, quantities) = strict_leader(scored, 0)?;
    ItemStats::from_quantities(sku, &quantities)
}
