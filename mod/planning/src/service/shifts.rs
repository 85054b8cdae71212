use fournil_core::ServiceError;

use super::PlanningService;
use crate::model::Shift;

impl PlanningService {
    pub fn list_shifts(&self) -> Result<Vec<Shift>, ServiceError> {
        Ok(self.tables()?.shifts.rows().to_vec())
    }

    /// Append-only; nothing checks for overlap or duplicates, the
    /// schedule is a plain ledger.
    pub fn append_shift(&self, shift: Shift) -> Result<Shift, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.shifts.push(shift.clone());
        self.persist(&tables.shifts)?;
        Ok(shift)
    }

    pub fn replace_shifts(&self, rows: Vec<Shift>) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        tables.shifts.replace_all(rows);
        self.persist(&tables.shifts)?;
        Ok(tables.shifts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    #[test]
    fn append_keeps_existing_rows() {
        let (_dir, svc) = testutil::service();
        let before = svc.list_shifts().unwrap().len();
        svc.append_shift(Shift {
            date: "2024-01-01".into(),
            employee: "Alice".into(),
            role: "Boulangère".into(),
            start: "06:00".into(),
            end: "12:00".into(),
        })
        .unwrap();
        assert_eq!(svc.list_shifts().unwrap().len(), before + 1);
    }

    #[test]
    fn duplicate_shifts_are_allowed() {
        let (_dir, svc) = testutil::service();
        let shift = Shift {
            date: "2024-01-01".into(),
            employee: "Bruno".into(),
            role: "Vente".into(),
            start: "08:00".into(),
            end: "12:00".into(),
        };
        svc.append_shift(shift.clone()).unwrap();
        svc.append_shift(shift.clone()).unwrap();
        let dupes = svc
            .list_shifts()
            .unwrap()
            .into_iter()
            .filter(|s| *s == shift)
            .count();
        assert_eq!(dupes, 2);
    }
}
