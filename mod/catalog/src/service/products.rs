use serde::Serialize;

use fournil_core::{ServiceError, apply_patch};

use super::CatalogService;
use crate::model::Product;

/// One line of the INCO label view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenReportRow {
    pub sku: String,
    pub name: String,
    pub allergens: Vec<String>,
}

impl CatalogService {
    pub fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.tables()?.products.rows().to_vec())
    }

    pub fn get_product(&self, sku: &str) -> Result<Product, ServiceError> {
        self.tables()?
            .products
            .iter()
            .find(|p| p.sku == sku)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("product '{sku}' not found")))
    }

    pub fn create_product(&self, product: Product) -> Result<Product, ServiceError> {
        if product.sku.trim().is_empty() {
            return Err(ServiceError::Validation("sku must not be empty".into()));
        }
        let mut tables = self.tables_mut()?;
        if tables.products.iter().any(|p| p.sku == product.sku) {
            return Err(ServiceError::Conflict(format!(
                "product '{}' already exists",
                product.sku
            )));
        }
        tables.products.push(product.clone());
        self.persist(&tables.products)?;
        Ok(product)
    }

    pub fn update_product(
        &self,
        sku: &str,
        mut patch: serde_json::Value,
    ) -> Result<Product, ServiceError> {
        // The key is immutable through PATCH; renaming is delete + create.
        if let Some(obj) = patch.as_object_mut() {
            obj.remove("sku");
        }
        let mut tables = self.tables_mut()?;
        let updated = {
            let Some(slot) = tables.products.iter_mut().find(|p| p.sku == sku) else {
                return Err(ServiceError::NotFound(format!("product '{sku}' not found")));
            };
            let updated: Product = apply_patch(slot, patch)?;
            *slot = updated.clone();
            updated
        };
        self.persist(&tables.products)?;
        Ok(updated)
    }

    pub fn delete_product(&self, sku: &str) -> Result<(), ServiceError> {
        let mut tables = self.tables_mut()?;
        let removed = tables.products.retain(|p| p.sku != sku);
        if removed == 0 {
            return Err(ServiceError::NotFound(format!("product '{sku}' not found")));
        }
        self.persist(&tables.products)?;
        Ok(())
    }

    /// Replace the whole table, as the spreadsheet editor writes it back.
    /// Taken as-is; per-row invariants are not re-checked here.
    pub fn replace_products(&self, rows: Vec<Product>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.products.replace_all(rows);
        self.persist(&tables.products)?;
        Ok(tables.products.len())
    }

    /// Products at or below their alert threshold.
    pub fn low_stock_products(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self
            .tables()?
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }

    /// The INCO label view: SKU, name and allergen set per product.
    pub fn allergen_report(&self) -> Result<Vec<AllergenReportRow>, ServiceError> {
        Ok(self
            .tables()?
            .products
            .iter()
            .map(|p| AllergenReportRow {
                sku: p.sku.clone(),
                name: p.name.clone(),
                allergens: p.allergens.clone(),
            })
            .collect())
    }
}
