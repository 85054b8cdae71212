use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

/// Reserved supplier label for a materialized recipe cost.
///
/// Rows carrying this label are synthetic: they are produced by applying
/// a recipe costing, not entered from a real supplier price list.
pub const CALCULATED_RECIPE_SUPPLIER: &str = "Recette calculée";

/// SupplierPrice — one supplier's quote for a product SKU.
///
/// Multiple rows per SKU are expected (one per supplier) and uniqueness
/// of (sku, supplier) is NOT enforced; edits may duplicate pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPrice {
    pub sku: String,
    pub supplier: String,
    pub unit: String,
    /// Quoted price, pre-tax (HT).
    pub price_pretax: f64,
    pub qty_per_unit: f64,
    /// Minimum order quantity.
    pub moq: i64,
}

impl SupplierPrice {
    pub fn is_calculated(&self) -> bool {
        self.supplier == CALCULATED_RECIPE_SUPPLIER
    }
}

/// CSV row form of [`SupplierPrice`].
#[derive(Debug, Serialize, Deserialize)]
pub struct SupplierPriceRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Fournisseur")]
    pub supplier: String,
    #[serde(rename = "Unité")]
    pub unit: String,
    #[serde(rename = "Prix HT")]
    pub price_pretax: f64,
    #[serde(rename = "Qté / unité")]
    pub qty_per_unit: f64,
    #[serde(rename = "MOQ")]
    pub moq: i64,
}

impl TableSpec for SupplierPrice {
    const FILE_STEM: &'static str = "supplier_prices";
    const HEADERS: &'static [&'static str] =
        &["SKU", "Fournisseur", "Unité", "Prix HT", "Qté / unité", "MOQ"];
    type Row = SupplierPriceRow;

    fn to_row(&self) -> SupplierPriceRow {
        SupplierPriceRow {
            sku: self.sku.clone(),
            supplier: self.supplier.clone(),
            unit: self.unit.clone(),
            price_pretax: self.price_pretax,
            qty_per_unit: self.qty_per_unit,
            moq: self.moq,
        }
    }

    fn from_row(row: SupplierPriceRow) -> Self {
        Self {
            sku: row.sku,
            supplier: row.supplier,
            unit: row.unit,
            price_pretax: row.price_pretax,
            qty_per_unit: row.qty_per_unit,
            moq: row.moq,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            SupplierPrice {
                sku: "BAG-TRAD".into(),
                supplier: "Moulins Dupont".into(),
                unit: "pièce".into(),
                price_pretax: 0.35,
                qty_per_unit: 1.0,
                moq: 50,
            },
            SupplierPrice {
                sku: "BAG-TRAD".into(),
                supplier: "Grossiste Paris".into(),
                unit: "pièce".into(),
                price_pretax: 0.33,
                qty_per_unit: 1.0,
                moq: 80,
            },
            SupplierPrice {
                sku: "CRO-BA".into(),
                supplier: "Beurres de Normandie".into(),
                unit: "pièce".into(),
                price_pretax: 0.42,
                qty_per_unit: 1.0,
                moq: 40,
            },
            SupplierPrice {
                sku: "CRO-BA".into(),
                supplier: "Grossiste Paris".into(),
                unit: "pièce".into(),
                price_pretax: 0.45,
                qty_per_unit: 1.0,
                moq: 60,
            },
        ]
    }
}

/// IngredientPrice — one supplier's quote for an ingredient code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPrice {
    pub code: String,
    pub supplier: String,
    /// Pre-tax price per purchase unit.
    pub price_pretax: f64,
    pub qty_per_unit: f64,
}

/// CSV row form of [`IngredientPrice`].
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientPriceRow {
    #[serde(rename = "Code ingrédient")]
    pub code: String,
    #[serde(rename = "Fournisseur")]
    pub supplier: String,
    #[serde(rename = "Prix HT / unité")]
    pub price_pretax: f64,
    #[serde(rename = "Qté / unité")]
    pub qty_per_unit: f64,
}

impl TableSpec for IngredientPrice {
    const FILE_STEM: &'static str = "ingredient_prices";
    const HEADERS: &'static [&'static str] =
        &["Code ingrédient", "Fournisseur", "Prix HT / unité", "Qté / unité"];
    type Row = IngredientPriceRow;

    fn to_row(&self) -> IngredientPriceRow {
        IngredientPriceRow {
            code: self.code.clone(),
            supplier: self.supplier.clone(),
            price_pretax: self.price_pretax,
            qty_per_unit: self.qty_per_unit,
        }
    }

    fn from_row(row: IngredientPriceRow) -> Self {
        Self {
            code: row.code,
            supplier: row.supplier,
            price_pretax: row.price_pretax,
            qty_per_unit: row.qty_per_unit,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            IngredientPrice {
                code: "FARINE-T45".into(),
                supplier: "Moulins Dupont".into(),
                price_pretax: 0.80,
                qty_per_unit: 1.0,
            },
            IngredientPrice {
                code: "FARINE-T45".into(),
                supplier: "Grossiste Paris".into(),
                price_pretax: 0.78,
                qty_per_unit: 1.0,
            },
            IngredientPrice {
                code: "BEURRE-AOC".into(),
                supplier: "Beurres de Normandie".into(),
                price_pretax: 7.20,
                qty_per_unit: 1.0,
            },
            IngredientPrice {
                code: "LEVURE-B".into(),
                supplier: "Grossiste Paris".into(),
                price_pretax: 3.50,
                qty_per_unit: 1.0,
            },
        ]
    }
}
