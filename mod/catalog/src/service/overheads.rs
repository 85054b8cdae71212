use fournil_core::ServiceError;

use super::CatalogService;
use crate::model::OverheadLine;

impl CatalogService {
    pub fn list_overheads(&self) -> Result<Vec<OverheadLine>, ServiceError> {
        Ok(self.tables()?.overheads.rows().to_vec())
    }

    pub fn replace_overheads(&self, rows: Vec<OverheadLine>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.overheads.replace_all(rows);
        self.persist(&tables.overheads)?;
        Ok(tables.overheads.len())
    }

    pub fn append_overhead(&self, row: OverheadLine) -> Result<OverheadLine, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.overheads.push(row.clone());
        self.persist(&tables.overheads)?;
        Ok(row)
    }
}
