use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::util::defaults::CalculatorDefaults;

/// How customs duty is charged per unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyType {
    /// Percentage of the unit product cost.
    #[default]
    Percent,
    /// Flat amount per unit.
    Fixed,
}

impl DutyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyType::Percent => "percent",
            DutyType::Fixed => "fixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyType::Percent => "Percent of product cost",
            DutyType::Fixed => "Fixed per unit",
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duty type `{0}` (expected `percent` or `fixed`)")]
pub struct ParseDutyTypeError(pub String);

impl FromStr for DutyType {
    type Err = ParseDutyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "percent" => Ok(DutyType::Percent),
            "fixed" => Ok(DutyType::Fixed),
            other => Err(ParseDutyTypeError(other.to_string())),
        }
    }
}

/// Raw form state. Every numeric field holds the text exactly as typed so
/// half-finished entries like `"12,"` survive between keystrokes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputRecord {
    pub selling_price_gross: String,
    pub vat_rate: String,
    pub unit_product_cost: String,
    pub transport_cost_unit: String,
    pub duty_type: DutyType,
    pub customs_duty_percent: String,
    pub customs_duty_fixed: String,
    pub fba_fee: String,
    pub referral_fee_rate: String,
    pub other_costs_unit: String,
    pub marketing_spend_rate: String,
    pub monthly_sales_units: String,
}

impl InputRecord {
    /// Blank form seeded with the configured default rates.
    pub fn from_defaults(defaults: &CalculatorDefaults) -> Self {
        Self {
            vat_rate: trim_rate(defaults.vat_rate),
            referral_fee_rate: trim_rate(defaults.referral_fee_rate),
            duty_type: defaults.duty_type,
            ..Self::default()
        }
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::SellingPriceGross => &self.selling_price_gross,
            InputField::VatRate => &self.vat_rate,
            InputField::UnitProductCost => &self.unit_product_cost,
            InputField::TransportCostUnit => &self.transport_cost_unit,
            InputField::CustomsDutyPercent => &self.customs_duty_percent,
            InputField::CustomsDutyFixed => &self.customs_duty_fixed,
            InputField::FbaFee => &self.fba_fee,
            InputField::ReferralFeeRate => &self.referral_fee_rate,
            InputField::OtherCostsUnit => &self.other_costs_unit,
            InputField::MarketingSpendRate => &self.marketing_spend_rate,
            InputField::MonthlySalesUnits => &self.monthly_sales_units,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::SellingPriceGross => &mut self.selling_price_gross,
            InputField::VatRate => &mut self.vat_rate,
            InputField::UnitProductCost => &mut self.unit_product_cost,
            InputField::TransportCostUnit => &mut self.transport_cost_unit,
            InputField::CustomsDutyPercent => &mut self.customs_duty_percent,
            InputField::CustomsDutyFixed => &mut self.customs_duty_fixed,
            InputField::FbaFee => &mut self.fba_fee,
            InputField::ReferralFeeRate => &mut self.referral_fee_rate,
            InputField::OtherCostsUnit => &mut self.other_costs_unit,
            InputField::MarketingSpendRate => &mut self.marketing_spend_rate,
            InputField::MonthlySalesUnits => &mut self.monthly_sales_units,
        };
        *slot = value.into();
    }
}

// 19.0 renders as "19", 7.5 as "7.5".
fn trim_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// The free-text fields of [`InputRecord`], in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    SellingPriceGross,
    VatRate,
    UnitProductCost,
    TransportCostUnit,
    CustomsDutyPercent,
    CustomsDutyFixed,
    FbaFee,
    ReferralFeeRate,
    OtherCostsUnit,
    MarketingSpendRate,
    MonthlySalesUnits,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::SellingPriceGross => "Selling price (gross)",
            InputField::VatRate => "VAT rate",
            InputField::UnitProductCost => "Product cost per unit",
            InputField::TransportCostUnit => "Transport cost per unit",
            InputField::CustomsDutyPercent => "Customs duty",
            InputField::CustomsDutyFixed => "Customs duty per unit",
            InputField::FbaFee => "FBA fee",
            InputField::ReferralFeeRate => "Referral fee",
            InputField::OtherCostsUnit => "Other costs per unit",
            InputField::MarketingSpendRate => "Marketing spend",
            InputField::MonthlySalesUnits => "Monthly sales",
        }
    }

    /// Unit suffix shown next to the input.
    pub fn suffix(&self) -> &'static str {
        match self {
            InputField::VatRate
            | InputField::CustomsDutyPercent
            | InputField::ReferralFeeRate => "%",
            InputField::MarketingSpendRate => "% of profit",
            InputField::MonthlySalesUnits => "units",
            _ => "€",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            InputField::MonthlySalesUnits => "0",
            _ => "0,00",
        }
    }

    /// Whether the field takes part in the calculation for the given duty mode.
    pub fn is_active(&self, duty_type: DutyType) -> bool {
        match self {
            InputField::CustomsDutyPercent => duty_type == DutyType::Percent,
            InputField::CustomsDutyFixed => duty_type == DutyType::Fixed,
            _ => true,
        }
    }
}
