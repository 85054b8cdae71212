use serde::Serialize;

use fournil_core::ServiceError;
use fournil_store::{Table, TableSpec, codec};

use super::PlanningService;
use super::payroll::WeekSummary;

/// A CSV download: suggested filename plus the serialized table.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

const WEEK_HEADERS: &[&str] = &[
    "Date",
    "Employé",
    "Rôle",
    "Début",
    "Fin",
    "Heures",
    "Coût chargé €",
];

/// Row shape of the weekly schedule download: the stored shift columns
/// plus the two derived figures.
#[derive(Debug, Serialize)]
struct WeekCsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Employé")]
    employee: String,
    #[serde(rename = "Rôle")]
    role: String,
    #[serde(rename = "Début")]
    start: String,
    #[serde(rename = "Fin")]
    end: String,
    #[serde(rename = "Heures")]
    hours: f64,
    #[serde(rename = "Coût chargé €")]
    cost: f64,
}

impl PlanningService {
    /// Serialize one table to its CSV form. The header row is present
    /// even when the table is empty.
    pub fn export_table(&self, table: &str) -> Result<CsvExport, ServiceError> {
        let tables = self.tables()?;
        let body = match table {
            "employees" => codec::to_csv_string(tables.employees.rows()),
            "shifts" => codec::to_csv_string(tables.shifts.rows()),
            _ => return Err(ServiceError::NotFound(format!("unknown table '{table}'"))),
        }
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(CsvExport { filename: format!("{table}.csv"), body })
    }

    /// Replace one table from an uploaded CSV body.
    ///
    /// Strict, unlike the startup load: a row that does not decode
    /// rejects the whole upload with a Validation error naming the
    /// offending line, and the stored file is left untouched.
    pub fn import_table(&self, table: &str, body: &str) -> Result<usize, ServiceError> {
        let mut tables = self.tables_mut()?;
        match table {
            "employees" => self.import_into(&mut tables.employees, body),
            "shifts" => self.import_into(&mut tables.shifts, body),
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

    /// One week of the schedule as a download, each row carrying its
    /// hours and loaded cost.
    pub fn export_week(&self, anchor: &str) -> Result<CsvExport, ServiceError> {
        let summary = self.week_summary(anchor)?;
        week_export(&summary)
    }
}

fn week_export(summary: &WeekSummary) -> Result<CsvExport, ServiceError> {
    let rows: Vec<WeekCsvRow> = summary
        .rows
        .iter()
        .map(|r| WeekCsvRow {
            date: r.shift.date.clone(),
            employee: r.shift.employee.clone(),
            role: r.shift.role.clone(),
            start: r.shift.start.clone(),
            end: r.shift.end.clone(),
            hours: r.hours,
            cost: r.cost,
        })
        .collect();
    let body = codec::rows_to_csv_string(WEEK_HEADERS, &rows)
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(CsvExport {
        filename: format!("planning_{}.csv", summary.monday),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shift;
    use crate::service::testutil;

    #[test]
    fn export_keeps_the_localized_header() {
        let (_dir, svc) = testutil::service();
        let export = svc.export_table("employees").unwrap();
        assert_eq!(export.filename, "employees.csv");
        assert!(export
            .body
            .starts_with("Employé,Rôle,Taux horaire €,Prime €/h,Charges %\n"));
    }

    #[test]
    fn export_then_import_round_trips() {
        let (_dir, svc) = testutil::service();
        let export = svc.export_table("employees").unwrap();
        let total = svc.import_table("employees", &export.body).unwrap();
        assert_eq!(total, 2);
        assert_eq!(svc.get_employee("Bruno").unwrap().bonus_per_hour, 0.5);
    }

    #[test]
    fn import_rejects_malformed_rows_with_the_line_number() {
        let (_dir, svc) = testutil::service();
        let bad = "Employé,Rôle,Taux horaire €,Prime €/h,Charges %\nAlice,Boulangère,quatorze,0.0,42.0\n";
        let err = svc.import_table("employees", bad).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(svc.list_employees().unwrap().len(), 2);
    }

    #[test]
    fn unknown_table_name_is_not_found() {
        let (_dir, svc) = testutil::service();
        assert!(matches!(
            svc.export_table("vacations").unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[test]
    fn week_export_appends_the_derived_columns() {
        let (_dir, svc) = testutil::service();
        svc.replace_shifts(vec![Shift {
            date: "2024-01-01".into(),
            employee: "Alice".into(),
            role: "Boulangère".into(),
            start: "08:00".into(),
            end: "12:00".into(),
        }])
        .unwrap();

        let export = svc.export_week("2024-01-01").unwrap();
        assert_eq!(export.filename, "planning_2024-01-01.csv");
        let mut lines = export.body.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Employé,Rôle,Début,Fin,Heures,Coût chargé €")
        );
        // 4 h at 14.0/h with 42 % charges.
        assert_eq!(
            lines.next(),
            Some("2024-01-01,Alice,Boulangère,08:00,12:00,4.0,79.52")
        );
    }
}
