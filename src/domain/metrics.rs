use super::inputs::{DutyType, InputRecord};
use super::parse::parse_number;

/// Per-unit and monthly results derived from an [`InputRecord`].
///
/// Fields may be `NaN` or infinite when the inputs are unparseable or a
/// divisor is zero; consumers render those as a placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutputRecord {
    pub net_selling_price: f64,
    pub duty_amount_unit: f64,
    pub landed_cost_unit: f64,
    pub referral_fee_amount: f64,
    pub amazon_fees: f64,
    pub total_cost_unit: f64,
    pub profit_pre_marketing: f64,
    pub marketing_cost_unit: f64,
    pub profit_post_marketing: f64,
    /// Post-marketing profit as a percentage of the net selling price.
    pub margin: f64,
    /// Post-marketing profit as a percentage of the landed cost.
    pub roi: f64,
    pub total_monthly_profit: f64,
}

pub fn compute_metrics(inputs: &InputRecord) -> OutputRecord {
    let selling_price_gross = parse_number(&inputs.selling_price_gross);
    let vat_rate = parse_number(&inputs.vat_rate);
    let unit_product_cost = parse_number(&inputs.unit_product_cost);
    let transport_cost_unit = parse_number(&inputs.transport_cost_unit);
    let fba_fee = parse_number(&inputs.fba_fee);
    let referral_fee_rate = parse_number(&inputs.referral_fee_rate);
    let other_costs_unit = parse_number(&inputs.other_costs_unit);
    let marketing_spend_rate = parse_number(&inputs.marketing_spend_rate);
    let monthly_sales_units = parse_number(&inputs.monthly_sales_units);

    let net_selling_price = selling_price_gross / (1.0 + vat_rate / 100.0);
    let referral_fee_amount = net_selling_price * (referral_fee_rate / 100.0);

    let duty_amount_unit = match inputs.duty_type {
        DutyType::Percent => {
            unit_product_cost * (or_zero(parse_number(&inputs.customs_duty_percent)) / 100.0)
        }
        DutyType::Fixed => parse_number(&inputs.customs_duty_fixed),
    };

    let landed_cost_unit = unit_product_cost + transport_cost_unit + duty_amount_unit;
    let amazon_fees = referral_fee_amount + fba_fee;
    let total_cost_unit = landed_cost_unit + amazon_fees + other_costs_unit;

    let profit_pre_marketing = net_selling_price - total_cost_unit;
    let marketing_cost_unit = non_negative(profit_pre_marketing) * (marketing_spend_rate / 100.0);
    let profit_post_marketing = profit_pre_marketing - marketing_cost_unit;

    OutputRecord {
        net_selling_price,
        duty_amount_unit,
        landed_cost_unit,
        referral_fee_amount,
        amazon_fees,
        total_cost_unit,
        profit_pre_marketing,
        marketing_cost_unit,
        profit_post_marketing,
        margin: profit_post_marketing / net_selling_price * 100.0,
        roi: profit_post_marketing / landed_cost_unit * 100.0,
        total_monthly_profit: profit_post_marketing * monthly_sales_units,
    }
}

/// A duty rate that is zero or unparseable contributes nothing.
fn or_zero(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate
    }
}

// f64::max would turn NaN into 0; keep it so a broken input stays visible.
fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(0.0)
    }
}

/// Sign classification used to colour results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitTone {
    Positive,
    Negative,
    Undefined,
}

impl ProfitTone {
    pub fn of(value: f64) -> Self {
        if !value.is_finite() {
            ProfitTone::Undefined
        } else if value < 0.0 {
            ProfitTone::Negative
        } else {
            ProfitTone::Positive
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn record(fields: serde_json::Value) -> InputRecord {
        serde_json::from_value(fields).expect("valid input record")
    }

    fn zero_fee_scenario() -> InputRecord {
        record(json!({
            "sellingPriceGross": "100",
            "vatRate": "0",
            "unitProductCost": "50",
            "transportCostUnit": "0",
            "dutyType": "percent",
            "customsDutyPercent": "0",
            "fbaFee": "0",
            "referralFeeRate": "0",
            "otherCostsUnit": "0",
            "marketingSpendRate": "0",
            "monthlySalesUnits": "10",
        }))
    }

    #[test]
    fn zero_vat_zero_fee_scenario() {
        let out = compute_metrics(&zero_fee_scenario());
        approx(out.net_selling_price, 100.0);
        approx(out.landed_cost_unit, 50.0);
        approx(out.amazon_fees, 0.0);
        approx(out.profit_pre_marketing, 50.0);
        approx(out.profit_post_marketing, 50.0);
        approx(out.margin, 50.0);
        approx(out.roi, 100.0);
        approx(out.total_monthly_profit, 500.0);
    }

    #[test]
    fn typical_listing() {
        let out = compute_metrics(&record(json!({
            "sellingPriceGross": "29,99",
            "vatRate": "19",
            "unitProductCost": "6",
            "transportCostUnit": "1,2",
            "dutyType": "percent",
            "customsDutyPercent": "10",
            "fbaFee": "3,5",
            "referralFeeRate": "15",
            "otherCostsUnit": "0,5",
            "marketingSpendRate": "20",
            "monthlySalesUnits": "300",
        })));

        let net = 29.99 / 1.19;
        let referral = net * 0.15;
        let landed = 6.0 + 1.2 + 0.6;
        let pre = net - (landed + referral + 3.5 + 0.5);
        let post = pre - pre * 0.2;

        approx(out.net_selling_price, net);
        approx(out.duty_amount_unit, 0.6);
        approx(out.referral_fee_amount, referral);
        approx(out.amazon_fees, referral + 3.5);
        approx(out.landed_cost_unit, landed);
        approx(out.marketing_cost_unit, pre * 0.2);
        approx(out.profit_post_marketing, post);
        approx(out.margin, post / net * 100.0);
        approx(out.roi, post / landed * 100.0);
        approx(out.total_monthly_profit, post * 300.0);
    }

    #[test]
    fn fixed_duty_ignores_percent_field() {
        let out = compute_metrics(&record(json!({
            "unitProductCost": "10",
            "dutyType": "fixed",
            "customsDutyFixed": "2",
            "customsDutyPercent": "50",
        })));
        approx(out.duty_amount_unit, 2.0);
        approx(out.landed_cost_unit, 12.0);

        let garbage = compute_metrics(&record(json!({
            "unitProductCost": "10",
            "dutyType": "fixed",
            "customsDutyFixed": "2",
            "customsDutyPercent": "1.2.3",
        })));
        approx(garbage.duty_amount_unit, 2.0);
    }

    #[test]
    fn percent_duty_ignores_fixed_field() {
        let out = compute_metrics(&record(json!({
            "unitProductCost": "10",
            "dutyType": "percent",
            "customsDutyPercent": "12",
            "customsDutyFixed": "x.y.z.1.2",
        })));
        approx(out.duty_amount_unit, 1.2);
    }

    #[test]
    fn unparseable_percent_duty_counts_as_zero() {
        let out = compute_metrics(&record(json!({
            "unitProductCost": "10",
            "dutyType": "percent",
            "customsDutyPercent": "1.2.3",
        })));
        assert_eq!(out.duty_amount_unit, 0.0);
        approx(out.landed_cost_unit, 10.0);
    }

    #[test]
    fn unparseable_fixed_duty_propagates_nan() {
        let out = compute_metrics(&record(json!({
            "sellingPriceGross": "100",
            "unitProductCost": "10",
            "dutyType": "fixed",
            "customsDutyFixed": "1.2.3",
        })));
        assert!(out.duty_amount_unit.is_nan());
        assert!(out.landed_cost_unit.is_nan());
        assert!(out.profit_post_marketing.is_nan());
        assert!(out.roi.is_nan());
        // unrelated results are still computed
        assert!(out.net_selling_price.is_finite());
        assert!(out.amazon_fees.is_finite());
    }

    #[test]
    fn negative_profit_is_not_charged_marketing() {
        let out = compute_metrics(&record(json!({
            "sellingPriceGross": "10",
            "vatRate": "0",
            "unitProductCost": "25",
            "marketingSpendRate": "30",
        })));
        assert!(out.profit_pre_marketing < 0.0);
        assert_eq!(out.marketing_cost_unit, 0.0);
        assert_eq!(out.profit_post_marketing, out.profit_pre_marketing);
    }

    #[test]
    fn marketing_stays_nan_when_profit_is_unknown() {
        let out = compute_metrics(&record(json!({
            "sellingPriceGross": "1.2.3",
            "marketingSpendRate": "10",
        })));
        assert!(out.profit_pre_marketing.is_nan());
        assert!(out.marketing_cost_unit.is_nan());
    }

    #[test]
    fn zero_price_gives_non_finite_margin() {
        let out = compute_metrics(&record(json!({
            "sellingPriceGross": "0",
            "unitProductCost": "5",
        })));
        assert_eq!(out.net_selling_price, 0.0);
        assert!(!out.margin.is_finite());
    }

    #[test]
    fn blank_form_yields_nan_ratios_without_panicking() {
        let out = compute_metrics(&InputRecord::default());
        assert_eq!(out.net_selling_price, 0.0);
        assert_eq!(out.profit_post_marketing, 0.0);
        assert!(out.margin.is_nan());
        assert!(out.roi.is_nan());
        assert_eq!(out.total_monthly_profit, 0.0);
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let inputs = record(json!({
            "sellingPriceGross": "19,99",
            "vatRate": "19",
            "unitProductCost": "1.2.3",
            "referralFeeRate": "15",
        }));
        let first = compute_metrics(&inputs);
        let second = compute_metrics(&inputs);
        let bits = |out: &OutputRecord| {
            [
                out.net_selling_price,
                out.duty_amount_unit,
                out.landed_cost_unit,
                out.referral_fee_amount,
                out.amazon_fees,
                out.total_cost_unit,
                out.profit_pre_marketing,
                out.marketing_cost_unit,
                out.profit_post_marketing,
                out.margin,
                out.roi,
                out.total_monthly_profit,
            ]
            .map(f64::to_bits)
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn profit_tone_classifies_sign_and_non_finite() {
        assert_eq!(ProfitTone::of(1.0), ProfitTone::Positive);
        assert_eq!(ProfitTone::of(0.0), ProfitTone::Positive);
        assert_eq!(ProfitTone::of(-0.01), ProfitTone::Negative);
        assert_eq!(ProfitTone::of(f64::NAN), ProfitTone::Undefined);
        assert_eq!(ProfitTone::of(f64::NEG_INFINITY), ProfitTone::Undefined);
    }
}
