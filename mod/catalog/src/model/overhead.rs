use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// OverheadLine — one fixed monthly cost (rent, energy, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverheadLine {
    pub label: String,
    pub monthly_amount: f64,
}

/// CSV row form of [`OverheadLine`].
#[derive(Debug, Serialize, Deserialize)]
pub struct OverheadLineRow {
    #[serde(rename = "Intitulé")]
    pub label: String,
    #[serde(rename = "Montant mensuel €")]
    pub monthly_amount: f64,
}

impl TableSpec for OverheadLine {
    const FILE_STEM: &'static str = "overheads";
    const HEADERS: &'static [&'static str] = &["Intitulé", "Montant mensuel €"];
    type Row = OverheadLineRow;

    fn to_row(&self) -> OverheadLineRow {
        OverheadLineRow {
            label: self.label.clone(),
            monthly_amount: self.monthly_amount,
        }
    }

    fn from_row(row: OverheadLineRow) -> Self {
        Self {
            label: row.label,
            monthly_amount: row.monthly_amount,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            OverheadLine { label: "Loyer".into(), monthly_amount: 1500.0 },
            OverheadLine { label: "Énergie".into(), monthly_amount: 600.0 },
            OverheadLine { label: "Assurance".into(), monthly_amount: 120.0 },
            OverheadLine { label: "Divers".into(), monthly_amount: 180.0 },
        ]
    }
}
