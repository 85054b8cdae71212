use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// RecipeLine — quantity of one ingredient per unit of product produced.
/// A product's full recipe is the set of lines sharing its SKU.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    pub sku: String,
    pub ingredient: String,
    pub qty_per_unit: f64,
    pub unit: String,
}

/// CSV row form of [`RecipeLine`].
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeLineRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Ingrédient")]
    pub ingredient: String,
    #[serde(rename = "Qté par unité")]
    pub qty_per_unit: f64,
    #[serde(rename = "Unité")]
    pub unit: String,
}

impl TableSpec for RecipeLine {
    const FILE_STEM: &'static str = "recipes";
    const HEADERS: &'static [&'static str] = &["SKU", "Ingrédient", "Qté par unité", "Unité"];
    type Row = RecipeLineRow;

    fn to_row(&self) -> RecipeLineRow {
        RecipeLineRow {
            sku: self.sku.clone(),
            ingredient: self.ingredient.clone(),
            qty_per_unit: self.qty_per_unit,
            unit: self.unit.clone(),
        }
    }

    fn from_row(row: RecipeLineRow) -> Self {
        Self {
            sku: row.sku,
            ingredient: row.ingredient,
            qty_per_unit: row.qty_per_unit,
            unit: row.unit,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            RecipeLine {
                sku: "BAG-TRAD".into(),
                ingredient: "FARINE-T45".into(),
                qty_per_unit: 0.20,
                unit: "kg".into(),
            },
            RecipeLine {
                sku: "BAG-TRAD".into(),
                ingredient: "LEVURE-B".into(),
                qty_per_unit: 0.005,
                unit: "kg".into(),
            },
            RecipeLine {
                sku: "CRO-BA".into(),
                ingredient: "FARINE-T45".into(),
                qty_per_unit: 0.08,
                unit: "kg".into(),
            },
            RecipeLine {
                sku: "CRO-BA".into(),
                ingredient: "BEURRE-AOC".into(),
                qty_per_unit: 0.035,
                unit: "kg".into(),
            },
        ]
    }
}
