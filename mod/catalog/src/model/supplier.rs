use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// Supplier — keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Primary key.
    pub name: String,

    pub contact: String,

    pub phone: String,

    /// Delivery lead time in days.
    pub lead_time_days: i64,
}

/// CSV row form of [`Supplier`].
#[derive(Debug, Serialize, Deserialize)]
pub struct SupplierRow {
    #[serde(rename = "Fournisseur")]
    pub name: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Téléphone")]
    pub phone: String,
    #[serde(rename = "Délai (j)")]
    pub lead_time_days: i64,
}

impl TableSpec for Supplier {
    const FILE_STEM: &'static str = "suppliers";
    const HEADERS: &'static [&'static str] =
        &["Fournisseur", "Contact", "Téléphone", "Délai (j)"];
    type Row = SupplierRow;

    fn to_row(&self) -> SupplierRow {
        SupplierRow {
            name: self.name.clone(),
            contact: self.contact.clone(),
            phone: self.phone.clone(),
            lead_time_days: self.lead_time_days,
        }
    }

    fn from_row(row: SupplierRow) -> Self {
        Self {
            name: row.name,
            contact: row.contact,
            phone: row.phone,
            lead_time_days: row.lead_time_days,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Supplier {
                name: "Moulins Dupont".into(),
                contact: "dupont@moulins.fr".into(),
                phone: "+33 1 23 45 67 89".into(),
                lead_time_days: 2,
            },
            Supplier {
                name: "Beurres de Normandie".into(),
                contact: "ventes@beurres.fr".into(),
                phone: "+33 2 12 34 56 78".into(),
                lead_time_days: 3,
            },
            Supplier {
                name: "Grossiste Paris".into(),
                contact: "contact@grossiste.paris".into(),
                phone: "+33 1 98 76 54 32".into(),
                lead_time_days: 1,
            },
        ]
    }
}
