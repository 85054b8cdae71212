use serde::Serialize;

use fournil_core::ServiceError;

use super::CatalogService;
use crate::model::{IngredientPrice, SupplierPrice};

/// Supplier rows for one SKU, cheapest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierComparison {
    pub sku: String,
    pub rows: Vec<ComparedPrice>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedPrice {
    #[serde(flatten)]
    pub price: SupplierPrice,
    /// Cheapest row for the SKU (ties go to the first in table order).
    pub best: bool,
}

impl CatalogService {
    pub fn list_supplier_prices(&self) -> Result<Vec<SupplierPrice>, ServiceError> {
        Ok(self.tables()?.supplier_prices.rows().to_vec())
    }

    pub fn replace_supplier_prices(&self, rows: Vec<SupplierPrice>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.supplier_prices.replace_all(rows);
        self.persist(&tables.supplier_prices)?;
        Ok(tables.supplier_prices.len())
    }

    /// Append-only, like adding a row at the bottom of the sheet. No
    /// uniqueness check on (sku, supplier).
    pub fn append_supplier_price(&self, row: SupplierPrice) -> Result<SupplierPrice, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.supplier_prices.push(row.clone());
        self.persist(&tables.supplier_prices)?;
        Ok(row)
    }

    pub fn list_ingredient_prices(&self) -> Result<Vec<IngredientPrice>, ServiceError> {
        Ok(self.tables()?.ingredient_prices.rows().to_vec())
    }

    pub fn replace_ingredient_prices(
        &self,
        rows: Vec<IngredientPrice>,
    ) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.ingredient_prices.replace_all(rows);
        self.persist(&tables.ingredient_prices)?;
        Ok(tables.ingredient_prices.len())
    }

    pub fn append_ingredient_price(
        &self,
        row: IngredientPrice,
    ) -> Result<IngredientPrice, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.ingredient_prices.push(row.clone());
        self.persist(&tables.ingredient_prices)?;
        Ok(row)
    }

    /// All supplier rows for `sku`, sorted by ascending pre-tax price.
    /// The stable sort keeps table order among equal prices, so the first
    /// row is the deterministic best pick.
    pub fn compare_suppliers(&self, sku: &str) -> Result<SupplierComparison, ServiceError> {
        let tables = self.tables()?;
        let mut rows: Vec<SupplierPrice> = tables
            .supplier_prices
            .iter()
            .filter(|p| p.sku == sku)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.price_pretax.total_cmp(&b.price_pretax));
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, price)| ComparedPrice { price, best: i == 0 })
            .collect();
        Ok(SupplierComparison { sku: sku.to_string(), rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    #[test]
    fn comparison_sorts_cheapest_first() {
        let (_dir, svc) = testutil::service();
        let cmp = svc.compare_suppliers("BAG-TRAD").unwrap();
        assert_eq!(cmp.rows.len(), 2);
        assert_eq!(cmp.rows[0].price.supplier, "Grossiste Paris");
        assert_eq!(cmp.rows[0].price.price_pretax, 0.33);
        assert!(cmp.rows[0].best);
        assert!(!cmp.rows[1].best);
    }

    #[test]
    fn comparison_tie_goes_to_first_table_row() {
        let (_dir, svc) = testutil::service();
        svc.replace_supplier_prices(vec![
            SupplierPrice {
                sku: "X".into(),
                supplier: "A".into(),
                unit: "pièce".into(),
                price_pretax: 0.50,
                qty_per_unit: 1.0,
                moq: 0,
            },
            SupplierPrice {
                sku: "X".into(),
                supplier: "B".into(),
                unit: "pièce".into(),
                price_pretax: 0.50,
                qty_per_unit: 1.0,
                moq: 0,
            },
        ])
        .unwrap();
        let cmp = svc.compare_suppliers("X").unwrap();
        assert_eq!(cmp.rows[0].price.supplier, "A");
        assert!(cmp.rows[0].best);
    }

    #[test]
    fn unknown_sku_compares_to_empty() {
        let (_dir, svc) = testutil::service();
        let cmp = svc.compare_suppliers("NOPE").unwrap();
        assert!(cmp.rows.is_empty());
    }
}
