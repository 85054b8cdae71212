use tracing::info;

use fournil_core::ServiceError;

use super::costing::{self, RecipeCost};
use super::CatalogService;
use crate::model::{CALCULATED_RECIPE_SUPPLIER, RecipeLine, SupplierPrice};

impl CatalogService {
    pub fn list_recipe_lines(&self) -> Result<Vec<RecipeLine>, ServiceError> {
        Ok(self.tables()?.recipes.rows().to_vec())
    }

    pub fn replace_recipe_lines(&self, rows: Vec<RecipeLine>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.recipes.replace_all(rows);
        self.persist(&tables.recipes)?;
        Ok(tables.recipes.len())
    }

    pub fn append_recipe_line(&self, row: RecipeLine) -> Result<RecipeLine, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.recipes.push(row.clone());
        self.persist(&tables.recipes)?;
        Ok(row)
    }

    /// Costed bill of materials for `sku` (read-only).
    pub fn recipe_cost(&self, sku: &str) -> Result<RecipeCost, ServiceError> {
        let tables = self.tables()?;
        Ok(costing::recipe_cost(
            tables.recipes.rows(),
            tables.ingredient_prices.rows(),
            sku,
        ))
    }

    /// Materialize the recipe cost as a synthetic supplier price row.
    ///
    /// Any prior row under the reserved supplier label for this SKU is
    /// removed first, so applying twice leaves exactly one row.
    pub fn apply_recipe_cost(&self, sku: &str) -> Result<RecipeCost, ServiceError> {
        let mut tables = self.tables_mut()?;
        let cost = costing::recipe_cost(
            tables.recipes.rows(),
            tables.ingredient_prices.rows(),
            sku,
        );
        tables
            .supplier_prices
            .retain(|p| !(p.sku == sku && p.is_calculated()));
        tables.supplier_prices.push(SupplierPrice {
            sku: sku.to_string(),
            supplier: CALCULATED_RECIPE_SUPPLIER.into(),
            unit: "unité".into(),
            price_pretax: costing::round4(cost.total),
            qty_per_unit: 1.0,
            moq: 0,
        });
        self.persist(&tables.supplier_prices)?;
        info!("materialized recipe cost for {sku}: {:.4}", cost.total);
        Ok(cost)
    }
}
