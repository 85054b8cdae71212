use serde::{Deserialize, Serialize};

use fournil_store::TableSpec;

use super::allergen::{join_allergens, parse_allergens};

/// Product — catalog entry. Primary key is `sku`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Primary key, unique across the catalog.
    pub sku: String,

    pub name: String,

    pub category: String,

    /// Shelf price including tax (TTC).
    pub price_incl_tax: f64,

    /// Consumption tax rate, percent.
    pub tax_pct: f64,

    /// INCO allergen labels carried by the product.
    #[serde(default)]
    pub allergens: Vec<String>,

    pub stock: i64,

    /// Stock level at or below which the product is flagged.
    pub alert_threshold: i64,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.alert_threshold
    }
}

/// CSV row form of [`Product`] (localized headers).
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Produit")]
    pub name: String,
    #[serde(rename = "Catégorie")]
    pub category: String,
    #[serde(rename = "Prix vente TTC")]
    pub price_incl_tax: f64,
    #[serde(rename = "TVA %")]
    pub tax_pct: f64,
    #[serde(rename = "Allergènes")]
    pub allergens: String,
    #[serde(rename = "Stock")]
    pub stock: i64,
    #[serde(rename = "Seuil alerte")]
    pub alert_threshold: i64,
}

impl TableSpec for Product {
    const FILE_STEM: &'static str = "products";
    const HEADERS: &'static [&'static str] = &[
        "SKU",
        "Produit",
        "Catégorie",
        "Prix vente TTC",
        "TVA %",
        "Allergènes",
        "Stock",
        "Seuil alerte",
    ];
    type Row = ProductRow;

    fn to_row(&self) -> ProductRow {
        ProductRow {
            sku: self.sku.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            price_incl_tax: self.price_incl_tax,
            tax_pct: self.tax_pct,
            allergens: join_allergens(&self.allergens),
            stock: self.stock,
            alert_threshold: self.alert_threshold,
        }
    }

    fn from_row(row: ProductRow) -> Self {
        Self {
            sku: row.sku,
            name: row.name,
            category: row.category,
            price_incl_tax: row.price_incl_tax,
            tax_pct: row.tax_pct,
            allergens: parse_allergens(&row.allergens),
            stock: row.stock,
            alert_threshold: row.alert_threshold,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Product {
                sku: "BAG-TRAD".into(),
                name: "Baguette traditionnelle".into(),
                category: "Boulangerie".into(),
                price_incl_tax: 1.20,
                tax_pct: 5.5,
                allergens: vec!["Gluten".into()],
                stock: 120,
                alert_threshold: 30,
            },
            Product {
                sku: "CRO-BA".into(),
                name: "Croissant beurre".into(),
                category: "Viennoiserie".into(),
                price_incl_tax: 1.10,
                tax_pct: 5.5,
                allergens: vec!["Gluten".into(), "Lait".into(), "Œufs".into()],
                stock: 80,
                alert_threshold: 20,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_includes_the_threshold_itself() {
        let mut p = Product::seed().remove(0);
        p.stock = p.alert_threshold;
        assert!(p.is_low_stock());
        p.stock = p.alert_threshold + 1;
        assert!(!p.is_low_stock());
    }

    #[test]
    fn allergens_survive_the_row_form() {
        let p = Product::seed().remove(1);
        let back = Product::from_row(p.to_row());
        assert_eq!(back.allergens, vec!["Gluten", "Lait", "Œufs"]);
        assert_eq!(back, p);
    }
}
