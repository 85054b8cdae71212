use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// One scheduled shift. Dates and times stay as entered; the payroll
/// pass parses them and zeroes or drops rows it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// ISO date (`2024-01-15`).
    pub date: String,

    pub employee: String,

    pub role: String,

    /// Start time, `HH:MM`.
    pub start: String,

    /// End time, `HH:MM`. Earlier than `start` means the shift crosses
    /// midnight.
    pub end: String,
}

/// CSV row form of [`Shift`] (localized headers).
#[derive(Debug, Serialize, Deserialize)]
pub struct ShiftRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Employé")]
    pub employee: String,
    #[serde(rename = "Rôle")]
    pub role: String,
    #[serde(rename = "Début")]
    pub start: String,
    #[serde(rename = "Fin")]
    pub end: String,
}

impl TableSpec for Shift {
    const FILE_STEM: &'static str = "shifts";
    const HEADERS: &'static [&'static str] = &["Date", "Employé", "Rôle", "Début", "Fin"];
    type Row = ShiftRow;

    fn to_row(&self) -> ShiftRow {
        ShiftRow {
            date: self.date.clone(),
            employee: self.employee.clone(),
            role: self.role.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    fn from_row(row: ShiftRow) -> Self {
        Self {
            date: row.date,
            employee: row.employee,
            role: row.role,
            start: row.start,
            end: row.end,
        }
    }

    fn seed() -> Vec<Self> {
        let today = Local::now().date_naive();
        vec![
            Shift {
                date: today.to_string(),
                employee: "Alice".into(),
                role: "Boulangère".into(),
                start: "05:00".into(),
                end: "13:00".into(),
            },
            Shift {
                date: (today + Duration::days(1)).to_string(),
                employee: "Bruno".into(),
                role: "Vente".into(),
                start: "08:00".into(),
                end: "14:00".into(),
            },
        ]
    }
}
