//! Recipe costing: resolve a product's bill-of-materials cost from the
//! best available ingredient prices.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{IngredientPrice, RecipeLine};

/// Costed recipe for one SKU.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCost {
    pub sku: String,
    pub lines: Vec<RecipeCostLine>,
    /// Sum of the line totals, pre-tax.
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCostLine {
    pub ingredient: String,
    pub qty_per_unit: f64,
    pub unit: String,
    /// Best (minimum) pre-tax price found for the ingredient; 0 when no
    /// supplier lists it.
    pub best_price: f64,
    pub line_total: f64,
}

/// Minimum pre-tax price per ingredient code.
///
/// Scanning in table order and only replacing on a strictly lower price
/// makes ties deterministic: the first supplier row wins.
pub fn best_prices(prices: &[IngredientPrice]) -> HashMap<String, f64> {
    let mut best: HashMap<String, f64> = HashMap::new();
    for p in prices {
        best.entry(p.code.clone())
            .and_modify(|cur| {
                if p.price_pretax < *cur {
                    *cur = p.price_pretax;
                }
            })
            .or_insert(p.price_pretax);
    }
    best
}

/// Cost the recipe of `sku`: sum of best_price × quantity over its lines.
///
/// A SKU with no lines costs 0. An ingredient missing from the price
/// table contributes 0, silently; the line still appears in the detail so
/// the gap is visible.
pub fn recipe_cost(lines: &[RecipeLine], prices: &[IngredientPrice], sku: &str) -> RecipeCost {
    let best = best_prices(prices);
    let mut out = Vec::new();
    let mut total = 0.0;
    for line in lines.iter().filter(|l| l.sku == sku) {
        let best_price = best.get(&line.ingredient).copied().unwrap_or(0.0);
        let line_total = best_price * line.qty_per_unit;
        total += line_total;
        out.push(RecipeCostLine {
            ingredient: line.ingredient.clone(),
            qty_per_unit: line.qty_per_unit,
            unit: line.unit.clone(),
            best_price,
            line_total,
        });
    }
    RecipeCost { sku: sku.to_string(), lines: out, total }
}

/// Round to 4 decimals, the precision kept when a cost is materialized
/// into the supplier price table.
pub(crate) fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
