//! Pricing engine: labor cost, overhead allocation and the margin
//! breakdown for one product unit.
//!
//! All functions are pure arithmetic over `f64` and never fail: division
//! guards resolve to 0 and out-of-range inputs pass through unchecked.

use serde::{Deserialize, Serialize};

use fournil_core::ServiceError;

use super::CatalogService;

/// Full cost/margin figures for one unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginBreakdown {
    /// Purchase cost, pre-tax.
    pub purchase_pretax: f64,
    pub labor_per_unit: f64,
    pub overhead_per_unit: f64,
    /// purchase + labor + overhead.
    pub cost_pretax: f64,
    pub selling_pretax: f64,
    pub selling_incl_tax: f64,
    /// selling_pretax − cost_pretax.
    pub margin_pretax: f64,
    /// Margin as % of the pre-tax selling price; 0 when that price is 0.
    pub margin_pct_of_selling: f64,
    /// Margin as % of the pre-tax cost; 0 when that cost is 0.
    pub markup_pct_of_cost: f64,
}

/// Inputs of a margin quote.
///
/// Tax rate and selling price default from the product row when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginParams {
    /// Purchase cost source: a supplier name from the price table, or the
    /// reserved calculated-recipe label.
    pub supplier: String,
    pub minutes_per_unit: f64,
    pub hourly_rate: f64,
    pub charges_pct: f64,
    #[serde(default)]
    pub bonus_per_hour: f64,
    /// Expected monthly production volume, in units.
    pub monthly_volume: f64,
    #[serde(default)]
    pub tax_pct: Option<f64>,
    #[serde(default)]
    pub selling_price_incl_tax: Option<f64>,
}

/// Loaded labor cost for one unit: minutes converted to hours, wage plus
/// bonus, grossed up by the employer charge percentage. Negative inputs
/// produce negative costs; nothing is rejected.
pub fn labor_cost_per_unit(
    minutes_per_unit: f64,
    hourly_rate: f64,
    charges_pct: f64,
    bonus_per_hour: f64,
) -> f64 {
    minutes_per_unit / 60.0 * (hourly_rate + bonus_per_hour) * (1.0 + charges_pct / 100.0)
}

/// Fixed monthly costs spread over the expected volume; 0 when the volume
/// is zero or negative.
pub fn overhead_allocation_per_unit(monthly_overheads: f64, monthly_volume_units: f64) -> f64 {
    if monthly_volume_units <= 0.0 {
        return 0.0;
    }
    monthly_overheads / monthly_volume_units
}

/// Margin breakdown for one unit. Degenerate inputs never fail: a tax
/// divisor of exactly 0 leaves the incl-tax price unchanged, and the two
/// percentage figures are 0 when their denominator is 0.
pub fn compute_margin(
    purchase_pretax: f64,
    labor_per_unit: f64,
    overhead_per_unit: f64,
    tax_pct: f64,
    selling_incl_tax: f64,
) -> MarginBreakdown {
    let cost_pretax = purchase_pretax + labor_per_unit + overhead_per_unit;
    let divisor = 1.0 + tax_pct / 100.0;
    let selling_pretax = if divisor == 0.0 {
        selling_incl_tax
    } else {
        selling_incl_tax / divisor
    };
    let margin_pretax = selling_pretax - cost_pretax;
    let margin_pct_of_selling = if selling_pretax == 0.0 {
        0.0
    } else {
        margin_pretax / selling_pretax * 100.0
    };
    let markup_pct_of_cost = if cost_pretax == 0.0 {
        0.0
    } else {
        margin_pretax / cost_pretax * 100.0
    };
    MarginBreakdown {
        purchase_pretax,
        labor_per_unit,
        overhead_per_unit,
        cost_pretax,
        selling_pretax,
        selling_incl_tax,
        margin_pretax,
        margin_pct_of_selling,
        markup_pct_of_cost,
    }
}

impl CatalogService {
    /// Quote the margin for `sku` with the purchase cost taken from the
    /// named supplier's price row (first match in table order).
    pub fn quote_margin(
        &self,
        sku: &str,
        params: &MarginParams,
    ) -> Result<MarginBreakdown, ServiceError> {
        let tables = self.tables()?;
        let product = tables
            .products
            .iter()
            .find(|p| p.sku == sku)
            .ok_or_else(|| ServiceError::NotFound(format!("product '{sku}' not found")))?;
        let purchase = tables
            .supplier_prices
            .iter()
            .find(|p| p.sku == sku && p.supplier == params.supplier)
            .map(|p| p.price_pretax)
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "no price from '{}' for '{sku}'",
                    params.supplier
                ))
            })?;

        let labor = labor_cost_per_unit(
            params.minutes_per_unit,
            params.hourly_rate,
            params.charges_pct,
            params.bonus_per_hour,
        );
        let monthly_overheads: f64 = tables.overheads.iter().map(|o| o.monthly_amount).sum();
        let overhead = overhead_allocation_per_unit(monthly_overheads, params.monthly_volume);
        let tax_pct = params.tax_pct.unwrap_or(product.tax_pct);
        let selling = params
            .selling_price_incl_tax
            .unwrap_or(product.price_incl_tax);

        Ok(compute_margin(purchase, labor, overhead, tax_pct, selling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil;

    #[test]
    fn labor_cost_basic() {
        // 3 minutes at 14 €/h, 42% charges: 0.05 h × 14 × 1.42
        let cost = labor_cost_per_unit(3.0, 14.0, 42.0, 0.0);
        assert!((cost - 0.994).abs() < 1e-12);
    }

    #[test]
    fn labor_cost_is_monotone_in_each_argument() {
        let base = labor_cost_per_unit(3.0, 14.0, 42.0, 0.0);
        assert!(labor_cost_per_unit(4.0, 14.0, 42.0, 0.0) >= base);
        assert!(labor_cost_per_unit(3.0, 15.0, 42.0, 0.0) >= base);
        assert!(labor_cost_per_unit(3.0, 14.0, 50.0, 0.0) >= base);
        assert!(labor_cost_per_unit(3.0, 14.0, 42.0, 0.5) >= base);
    }

    #[test]
    fn overhead_allocation_guards_zero_and_negative_volume() {
        assert_eq!(overhead_allocation_per_unit(2400.0, 0.0), 0.0);
        assert_eq!(overhead_allocation_per_unit(2400.0, -5.0), 0.0);
        assert!((overhead_allocation_per_unit(2400.0, 5000.0) - 0.48).abs() < 1e-12);
    }

    #[test]
    fn margin_of_break_even_product_is_zero() {
        let m = compute_margin(10.0, 0.0, 0.0, 0.0, 10.0);
        assert_eq!(m.cost_pretax, 10.0);
        assert_eq!(m.selling_pretax, 10.0);
        assert_eq!(m.margin_pretax, 0.0);
        assert_eq!(m.margin_pct_of_selling, 0.0);
        assert_eq!(m.markup_pct_of_cost, 0.0);
    }

    #[test]
    fn tax_divisor_of_zero_passes_the_price_through() {
        // tax_pct = -100 makes the divisor exactly 0.
        let m = compute_margin(1.0, 0.0, 0.0, -100.0, 1.20);
        assert_eq!(m.selling_pretax, 1.20);
    }

    #[test]
    fn zero_selling_price_yields_zero_percentages() {
        let m = compute_margin(1.0, 0.0, 0.0, 5.5, 0.0);
        assert_eq!(m.selling_pretax, 0.0);
        assert_eq!(m.margin_pct_of_selling, 0.0);
        assert!(m.margin_pretax < 0.0);
    }

    #[test]
    fn margin_pct_round_trips_through_the_selling_price() {
        // Solve S from cost C and target margin M, feed it back.
        let c = 0.85;
        let m_target = 35.0;
        let s = c / (1.0 - m_target / 100.0);
        let m = compute_margin(c, 0.0, 0.0, 0.0, s);
        assert!((m.margin_pct_of_selling - m_target).abs() < 1e-9);
    }

    #[test]
    fn quote_uses_product_defaults_for_tax_and_price() {
        let (_dir, svc) = testutil::service();
        let quote = svc
            .quote_margin(
                "BAG-TRAD",
                &MarginParams {
                    supplier: "Grossiste Paris".into(),
                    minutes_per_unit: 3.0,
                    hourly_rate: 14.0,
                    charges_pct: 42.0,
                    bonus_per_hour: 0.0,
                    monthly_volume: 5000.0,
                    tax_pct: None,
                    selling_price_incl_tax: None,
                },
            )
            .unwrap();
        assert_eq!(quote.purchase_pretax, 0.33);
        assert_eq!(quote.selling_incl_tax, 1.20);
        // selling HT = 1.20 / 1.055
        assert!((quote.selling_pretax - 1.20 / 1.055).abs() < 1e-12);
        // cost = 0.33 + 0.994 + 2400/5000
        assert!((quote.cost_pretax - (0.33 + 0.994 + 0.48)).abs() < 1e-12);
    }

    #[test]
    fn quote_for_unknown_supplier_is_not_found() {
        let (_dir, svc) = testutil::service();
        let err = svc
            .quote_margin(
                "BAG-TRAD",
                &MarginParams {
                    supplier: "Boulange & Cie".into(),
                    minutes_per_unit: 0.0,
                    hourly_rate: 0.0,
                    charges_pct: 0.0,
                    bonus_per_hour: 0.0,
                    monthly_volume: 0.0,
                    tax_pct: None,
                    selling_price_incl_tax: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
