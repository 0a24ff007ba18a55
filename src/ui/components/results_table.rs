use dioxus::prelude::*;

use crate::{
    domain::{OutputRecord, ProfitTone},
    ui::theme,
    util::format::{format_currency, format_percent},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
    /// Only profit-like rows are coloured.
    pub tone: Option<ProfitTone>,
    pub emphasis: bool,
}

impl ResultRow {
    fn cost(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: format_currency(value),
            tone: None,
            emphasis: false,
        }
    }

    fn profit(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: format_currency(value),
            tone: Some(ProfitTone::of(value)),
            emphasis: false,
        }
    }

    fn ratio(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: format_percent(value),
            tone: Some(ProfitTone::of(value)),
            emphasis: false,
        }
    }

    fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }
}

pub fn result_rows(outputs: &OutputRecord) -> Vec<ResultRow> {
    vec![
        ResultRow::cost("Net selling price", outputs.net_selling_price),
        ResultRow::cost("Customs duty per unit", outputs.duty_amount_unit),
        ResultRow::cost("Landed cost per unit", outputs.landed_cost_unit),
        ResultRow::cost("Referral fee", outputs.referral_fee_amount),
        ResultRow::cost("Amazon fees total", outputs.amazon_fees),
        ResultRow::cost("Total cost per unit", outputs.total_cost_unit).emphasized(),
        ResultRow::profit("Profit before marketing", outputs.profit_pre_marketing),
        ResultRow::cost("Marketing cost per unit", outputs.marketing_cost_unit),
        ResultRow::profit("Profit after marketing", outputs.profit_post_marketing).emphasized(),
        ResultRow::ratio("Margin", outputs.margin),
        ResultRow::ratio("ROI", outputs.roi),
        ResultRow::profit("Monthly profit", outputs.total_monthly_profit).emphasized(),
    ]
}

#[component]
pub fn ResultsTable(outputs: OutputRecord) -> Element {
    let rows = result_rows(&outputs);

    rsx! {
        table { class: "results-table",
            tbody {
                for row in rows {
                    tr {
                        key: "{row.label}",
                        class: if row.emphasis { "emphasis" } else { "" },
                        td { "{row.label}" }
                        td {
                            class: "value {row.tone.map(theme::tone_class).unwrap_or_default()}",
                            "{row.value}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::format::PLACEHOLDER;

    #[test]
    fn non_finite_results_show_placeholder() {
        let outputs = OutputRecord {
            margin: f64::NAN,
            roi: f64::INFINITY,
            ..OutputRecord::default()
        };
        let rows = result_rows(&outputs);
        let margin = rows.iter().find(|r| r.label == "Margin").unwrap();
        let roi = rows.iter().find(|r| r.label == "ROI").unwrap();
        assert_eq!(margin.value, PLACEHOLDER);
        assert_eq!(margin.tone, Some(ProfitTone::Undefined));
        assert_eq!(roi.value, PLACEHOLDER);
    }

    #[test]
    fn losses_are_marked_negative() {
        let outputs = OutputRecord {
            profit_post_marketing: -3.5,
            ..OutputRecord::default()
        };
        let rows = result_rows(&outputs);
        let profit = rows
            .iter()
            .find(|r| r.label == "Profit after marketing")
            .unwrap();
        assert_eq!(profit.value, "-3,50 €");
        assert_eq!(profit.tone, Some(ProfitTone::Negative));
        assert!(profit.emphasis);
    }

    #[test]
    fn every_output_field_has_a_row() {
        assert_eq!(result_rows(&OutputRecord::default()).len(), 12);
    }
}
