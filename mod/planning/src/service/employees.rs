use fournil_core::{ServiceError, apply_patch};

use super::PlanningService;
use crate::model::Employee;

impl PlanningService {
    pub fn list_employees(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.tables()?.employees.rows().to_vec())
    }

    pub fn get_employee(&self, name: &str) -> Result<Employee, ServiceError> {
        self.tables()?
            .employees
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("employee '{name}' not found")))
    }

    pub fn create_employee(&self, employee: Employee) -> Result<Employee, ServiceError> {
        if employee.name.trim().is_empty() {
            return Err(ServiceError::Validation("employee name must not be empty".into()));
        }
        let mut tables = self.tables_mut()?;
        if tables.employees.iter().any(|e| e.name == employee.name) {
            return Err(ServiceError::Conflict(format!(
                "employee '{}' already exists",
                employee.name
            )));
        }
        tables.employees.push(employee.clone());
        self.persist(&tables.employees)?;
        Ok(employee)
    }

    pub fn update_employee(
        &self,
        name: &str,
        mut patch: serde_json::Value,
    ) -> Result<Employee, ServiceError> {
        if let Some(obj) = patch.as_object_mut() {
            obj.remove("name");
        }
        let mut tables = self.tables_mut()?;
        let updated = {
            let Some(slot) = tables.employees.iter_mut().find(|e| e.name == name) else {
                return Err(ServiceError::NotFound(format!("employee '{name}' not found")));
            };
            let updated: Employee = apply_patch(slot, patch)?;
            *slot = updated.clone();
            updated
        };
        self.persist(&tables.employees)?;
        Ok(updated)
    }

    pub fn delete_employee(&self, name: &str) -> Result<(), ServiceError> {
        let mut tables = self.tables_mut()?;
        let removed = tables.employees.retain(|e| e.name != name);
        if removed == 0 {
            return Err(ServiceError::NotFound(format!("employee '{name}' not found")));
        }
        self.persist(&tables.employees)?;
        Ok(())
    }

    pub fn replace_employees(&self, rows: Vec<Employee>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.employees.replace_all(rows);
        self.persist(&tables.employees)?;
        Ok(tables.employees.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    #[test]
    fn seed_roster_is_reachable_by_name() {
        let (_dir, svc) = testutil::service();
        let alice = svc.get_employee("Alice").unwrap();
        assert_eq!(alice.hourly_rate, 14.0);
        assert_eq!(alice.charge_pct, 42.0);
    }

    #[test]
    fn patch_cannot_rename() {
        let (_dir, svc) = testutil::service();
        let updated = svc
            .update_employee(
                "Bruno",
                serde_json::json!({"name": "Benoît", "hourlyRate": 12.5}),
            )
            .unwrap();
        assert_eq!(updated.name, "Bruno");
        assert_eq!(updated.hourly_rate, 12.5);
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let (_dir, svc) = testutil::service();
        let err = svc.delete_employee("Zoé").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
