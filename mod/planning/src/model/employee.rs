use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// Employee — pay profile for payroll figures. Primary key is `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Display name, unique across the roster.
    pub name: String,

    pub role: String,

    /// Base wage, euros per hour.
    pub hourly_rate: f64,

    /// Flat bonus on top of the wage, euros per hour.
    #[serde(default)]
    pub bonus_per_hour: f64,

    /// Employer charges, percent of (rate + bonus).
    pub charge_pct: f64,
}

/// CSV row form of [`Employee`] (localized headers).
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeRow {
    #[serde(rename = "Employé")]
    pub name: String,
    #[serde(rename = "Rôle")]
    pub role: String,
    #[serde(rename = "Taux horaire €")]
    pub hourly_rate: f64,
    #[serde(rename = "Prime €/h")]
    pub bonus_per_hour: f64,
    #[serde(rename = "Charges %")]
    pub charge_pct: f64,
}

impl TableSpec for Employee {
    const FILE_STEM: &'static str = "employees";
    const HEADERS: &'static [&'static str] = &[
        "Employé",
        "Rôle",
        "Taux horaire €",
        "Prime €/h",
        "Charges %",
    ];
    type Row = EmployeeRow;

    fn to_row(&self) -> EmployeeRow {
        EmployeeRow {
            name: self.name.clone(),
            role: self.role.clone(),
            hourly_rate: self.hourly_rate,
            bonus_per_hour: self.bonus_per_hour,
            charge_pct: self.charge_pct,
        }
    }

    fn from_row(row: EmployeeRow) -> Self {
        Self {
            name: row.name,
            role: row.role,
            hourly_rate: row.hourly_rate,
            bonus_per_hour: row.bonus_per_hour,
            charge_pct: row.charge_pct,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Employee {
                name: "Alice".into(),
                role: "Boulangère".into(),
                hourly_rate: 14.0,
                bonus_per_hour: 0.0,
                charge_pct: 42.0,
            },
            Employee {
                name: "Bruno".into(),
                role: "Vente".into(),
                hourly_rate: 12.0,
                bonus_per_hour: 0.5,
                charge_pct: 38.0,
            },
        ]
    }
}
