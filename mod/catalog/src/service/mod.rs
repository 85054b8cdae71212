pub mod costing;
pub mod ingredients;
pub mod io;
pub mod overheads;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod recipes;
pub mod suppliers;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::info;

use fournil_core::ServiceError;
use fournil_store::{Table, TableSpec, TableStore};

use crate::model::{
    Ingredient, IngredientPrice, OverheadLine, Product, RecipeLine, Supplier, SupplierPrice,
};

/// Catalog service — owns the product, supplier, ingredient, recipe and
/// overhead tables and the computations over them.
pub struct CatalogService {
    store: TableStore,
    tables: RwLock<CatalogTables>,
}

/// All catalog tables, loaded once at startup and mutated in place.
pub(crate) struct CatalogTables {
    pub products: Table<Product>,
    pub suppliers: Table<Supplier>,
    pub supplier_prices: Table<SupplierPrice>,
    pub ingredients: Table<Ingredient>,
    pub ingredient_prices: Table<IngredientPrice>,
    pub recipes: Table<RecipeLine>,
    pub overheads: Table<OverheadLine>,
}

/// KPI summary consumed by the daemon overview endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub products: usize,
    pub low_stock: usize,
    pub monthly_overheads: f64,
}

impl CatalogService {
    /// Load every catalog table from `store`, seeding the missing ones.
    pub fn new(store: TableStore) -> Self {
        let tables = CatalogTables {
            products: store.load_or_seed(),
            suppliers: store.load_or_seed(),
            supplier_prices: store.load_or_seed(),
            ingredients: store.load_or_seed(),
            ingredient_prices: store.load_or_seed(),
            recipes: store.load_or_seed(),
            overheads: store.load_or_seed(),
        };
        info!(
            "catalog tables loaded: {} products, {} suppliers, {} supplier prices, {} ingredients, {} ingredient prices, {} recipe lines, {} overhead lines",
            tables.products.len(),
            tables.suppliers.len(),
            tables.supplier_prices.len(),
            tables.ingredients.len(),
            tables.ingredient_prices.len(),
            tables.recipes.len(),
            tables.overheads.len(),
        );
        Self {
            store,
            tables: RwLock::new(tables),
        }
    }

    pub fn overview(&self) -> Result<CatalogOverview, ServiceError> {
        let tables = self.tables()?;
        Ok(CatalogOverview {
            products: tables.products.len(),
            low_stock: tables.products.iter().filter(|p| p.is_low_stock()).count(),
            monthly_overheads: tables.overheads.iter().map(|o| o.monthly_amount).sum(),
        })
    }

    pub(crate) fn tables(&self) -> Result<RwLockReadGuard<'_, CatalogTables>, ServiceError> {
        self.tables
            .read()
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    pub(crate) fn tables_mut(&self) -> Result<RwLockWriteGuard<'_, CatalogTables>, ServiceError> {
        self.tables
            .write()
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// Write a mutated table back to its CSV file (commit-on-edit).
    pub(crate) fn persist<S: TableSpec>(&self, table: &Table<S>) -> Result<(), ServiceError> {
        self.store
            .save(table)
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    /// Service over a fresh temp directory, so every table starts from
    /// its seed rows.
    pub(crate) fn service() -> (tempfile::TempDir, CatalogService) {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        (dir, CatalogService::new(store))
    }
}
