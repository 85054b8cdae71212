use fournil_core::{ServiceError, apply_patch};

use super::CatalogService;
use crate::model::Supplier;

impl CatalogService {
    pub fn list_suppliers(&self) -> Result<Vec<Supplier>, ServiceError> {
        Ok(self.tables()?.suppliers.rows().to_vec())
    }

    pub fn get_supplier(&self, name: &str) -> Result<Supplier, ServiceError> {
        self.tables()?
            .suppliers
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("supplier '{name}' not found")))
    }

    pub fn create_supplier(&self, supplier: Supplier) -> Result<Supplier, ServiceError> {
        if supplier.name.trim().is_empty() {
            return Err(ServiceError::Validation("supplier name must not be empty".into()));
        }
        let mut tables = self.tables_mut()?;
        if tables.suppliers.iter().any(|s| s.name == supplier.name) {
            return Err(ServiceError::Conflict(format!(
                "supplier '{}' already exists",
                supplier.name
            )));
        }
        tables.suppliers.push(supplier.clone());
        self.persist(&tables.suppliers)?;
        Ok(supplier)
    }

    pub fn update_supplier(
        &self,
        name: &str,
        mut patch: serde_json::Value,
    ) -> Result<Supplier, ServiceError> {
        if let Some(obj) = patch.as_object_mut() {
            obj.remove("name");
        }
        let mut tables = self.tables_mut()?;
        let updated = {
            let Some(slot) = tables.suppliers.iter_mut().find(|s| s.name == name) else {
                return Err(ServiceError::NotFound(format!("supplier '{name}' not found")));
            };
            let updated: Supplier = apply_patch(slot, patch)?;
            *slot = updated.clone();
            updated
        };
        self.persist(&tables.suppliers)?;
        Ok(updated)
    }

    pub fn delete_supplier(&self, name: &str) -> Result<(), ServiceError> {
        let mut tables = self.tables_mut()?;
        let removed = tables.suppliers.retain(|s| s.name != name);
        if removed == 0 {
            return Err(ServiceError::NotFound(format!("supplier '{name}' not found")));
        }
        self.persist(&tables.suppliers)?;
        Ok(())
    }

    pub fn replace_suppliers(&self, rows: Vec<Supplier>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.suppliers.replace_all(rows);
        self.persist(&tables.suppliers)?;
        Ok(tables.suppliers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    #[test]
    fn seed_suppliers_are_reachable_by_name() {
        let (_dir, svc) = testutil::service();
        let s = svc.get_supplier("Moulins Dupont").unwrap();
        assert_eq!(s.lead_time_days, 2);
    }

    #[test]
    fn duplicate_name_is_a_conflict() {
        let (_dir, svc) = testutil::service();
        let err = svc
            .create_supplier(Supplier {
                name: "Grossiste Paris".into(),
                contact: String::new(),
                phone: String::new(),
                lead_time_days: 1,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
