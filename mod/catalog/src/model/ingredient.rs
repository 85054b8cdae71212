use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// Ingredient — keyed by code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Primary key, referenced by recipe lines.
    pub code: String,

    pub name: String,

    /// Unit the ingredient is purchased in (kg, L, ...).
    pub purchase_unit: String,
}

/// CSV row form of [`Ingredient`].
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientRow {
    #[serde(rename = "Code ingrédient")]
    pub code: String,
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Unité achat")]
    pub purchase_unit: String,
}

impl TableSpec for Ingredient {
    const FILE_STEM: &'static str = "ingredients";
    const HEADERS: &'static [&'static str] = &["Code ingrédient", "Nom", "Unité achat"];
    type Row = IngredientRow;

    fn to_row(&self) -> IngredientRow {
        IngredientRow {
            code: self.code.clone(),
            name: self.name.clone(),
            purchase_unit: self.purchase_unit.clone(),
        }
    }

    fn from_row(row: IngredientRow) -> Self {
        Self {
            code: row.code,
            name: row.name,
            purchase_unit: row.purchase_unit,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Ingredient {
                code: "FARINE-T45".into(),
                name: "Farine T45".into(),
                purchase_unit: "kg".into(),
            },
            Ingredient {
                code: "BEURRE-AOC".into(),
                name: "Beurre AOP".into(),
                purchase_unit: "kg".into(),
            },
            Ingredient {
                code: "LEVURE-B".into(),
                name: "Levure boulangère".into(),
                purchase_unit: "kg".into(),
            },
        ]
    }
}
