use fournil_core::{ServiceError, apply_patch};

use super::CatalogService;
use crate::model::Ingredient;

impl CatalogService {
    pub fn list_ingredients(&self) -> Result<Vec<Ingredient>, ServiceError> {
        Ok(self.tables()?.ingredients.rows().to_vec())
    }

    pub fn get_ingredient(&self, code: &str) -> Result<Ingredient, ServiceError> {
        self.tables()?
            .ingredients
            .iter()
            .find(|i| i.code == code)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("ingredient '{code}' not found")))
    }

    pub fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, ServiceError> {
        if ingredient.code.trim().is_empty() {
            return Err(ServiceError::Validation("ingredient code must not be empty".into()));
        }
        let mut tables = self.tables_mut()?;
        if tables.ingredients.iter().any(|i| i.code == ingredient.code) {
            return Err(ServiceError::Conflict(format!(
                "ingredient '{}' already exists",
                ingredient.code
            )));
        }
        tables.ingredients.push(ingredient.clone());
        self.persist(&tables.ingredients)?;
        Ok(ingredient)
    }

    pub fn update_ingredient(
        &self,
        code: &str,
        mut patch: serde_json::Value,
    ) -> Result<Ingredient, ServiceError> {
        if let Some(obj) = patch.as_object_mut() {
            obj.remove("code");
        }
        let mut tables = self.tables_mut()?;
        let updated = {
            let Some(slot) = tables.ingredients.iter_mut().find(|i| i.code == code) else {
                return Err(ServiceError::NotFound(format!("ingredient '{code}' not found")));
            };
            let updated: Ingredient = apply_patch(slot, patch)?;
            *slot = updated.clone();
            updated
        };
        self.persist(&tables.ingredients)?;
        Ok(updated)
    }

    pub fn delete_ingredient(&self, code: &str) -> Result<(), ServiceError> {
        let mut tables = self.tables_mut()?;
        let removed = tables.ingredients.retain(|i| i.code != code);
        if removed == 0 {
            return Err(ServiceError::NotFound(format!("ingredient '{code}' not found")));
        }
        self.persist(&tables.ingredients)?;
        Ok(())
    }

    pub fn replace_ingredients(&self, rows: Vec<Ingredient>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.ingredients.replace_all(rows);
        self.persist(&tables.ingredients)?;
        Ok(tables.ingredients.len())
    }
}
