use fournil_core::ServiceError;
use fournil_store::{Table, TableSpec, codec};

use super::CatalogService;

/// A CSV download: suggested filename plus the serialized table.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

impl CatalogService {
    /// Serialize one table to its CSV form. The header row is present
    /// even when the table is empty.
    pub fn export_table(&self, table: &str) -> Result<CsvExport, ServiceError> {
        let tables = self.tables()?;
        let body = match table {
            "products" => codec::to_csv_string(tables.products.rows()),
            "suppliers" => codec::to_csv_string(tables.suppliers.rows()),
            "supplier_prices" => codec::to_csv_string(tables.supplier_prices.rows()),
            "ingredients" => codec::to_csv_string(tables.ingredients.rows()),
            "ingredient_prices" => codec::to_csv_string(tables.ingredient_prices.rows()),
            "recipes" => codec::to_csv_string(tables.recipes.rows()),
            "overheads" => codec::to_csv_string(tables.overheads.rows()),
            _ => return Err(ServiceError::NotFound(format!("unknown table '{table}'"))),
        }
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(CsvExport { filename: format!("{table}.csv"), body })
    }

    /// Replace one table from an uploaded CSV body.
    ///
    /// Unlike the startup load, this path is strict: a row that does not
    /// decode rejects the whole upload with a Validation error naming the
    /// offending line, and the stored file is left untouched.
    pub fn import_table(&self, table: &str, body: &str) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        match table {
            "products" => self.import_into(&mut tables.products, body),
            "suppliers" => self.import_into(&mut tables.suppliers, body),
            "supplier_prices" => self.import_into(&mut tables.supplier_prices, body),
            "ingredients" => self.import_into(&mut tables.ingredients, body),
            "ingredient_prices" => self.import_into(&mut tables.ingredient_prices, body),
            "recipes" => self.import_into(&mut tables.recipes, body),
            "overheads" => self.import_into(&mut tables.overheads, body),
            _ => Err(ServiceError::NotFound(format!("unknown table '{table}'"))),
        }
    }

    fn import_into<S: TableSpec>(
        &self,
        table: &mut Table<S>,
        body: &str,
    ) -> Result<usize, ServiceError> {
        let rows =
            codec::from_csv_str::<S>(body).map_err(|e| ServiceError::Validation(e.to_string()))?;
        table.replace_all(rows);
        self.persist(table)?;
        Ok(table.len())
    }
}
