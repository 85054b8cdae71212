pub mod employees;
pub mod io;
pub mod payroll;
pub mod shifts;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use fournil_core::ServiceError;
use fournil_store::{Table, TableSpec, TableStore};

use crate::model::{Employee, Shift};

/// Planning service — owns the employee roster and the shift schedule.
pub struct PlanningService {
    store: TableStore,
    tables: RwLock<PlanningTables>,
}

pub(crate) struct PlanningTables {
    pub employees: Table<Employee>,
    pub shifts: Table<Shift>,
}

impl PlanningService {
    /// Load both planning tables from `store`, seeding the missing ones.
    pub fn new(store: TableStore) -> Self {
        let tables = PlanningTables {
            employees: store.load_or_seed(),
            shifts: store.load_or_seed(),
        };
        info!(
            "planning tables loaded: {} employees, {} shifts",
            tables.employees.len(),
            tables.shifts.len(),
        );
        Self {
            store,
            tables: RwLock::new(tables),
        }
    }

    pub(crate) fn tables(&self) -> Result<RwLockReadGuard<'_, PlanningTables>, ServiceError> {
        self.tables
            .read()
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    pub(crate) fn tables_mut(&self) -> Result<RwLockWriteGuard<'_, PlanningTables>, ServiceError> {
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

    /// Service over a fresh temp directory, so both tables start from
    /// their seed rows.
    pub(crate) fn service() -> (tempfile::TempDir, PlanningService) {
        let dir = tempfile::tempdir().unwrap();
        let store = TableStore::open(dir.path()).unwrap();
        (dir, PlanningService::new(store))
    }
}
