use dioxus::prelude::*;

use crate::{
    domain::{build_chart, compute_metrics, DutyType, InputField, InputRecord, ProfitTone},
    ui::components::{
        breakdown_chart::BreakdownChart, kpi_card::KpiCard, number_field::NumberField,
        results_table::ResultsTable,
    },
    util::{
        defaults::defaults_or_builtin,
        format::{format_currency, format_percent},
    },
};

const PRICING_FIELDS: [InputField; 2] = [InputField::SellingPriceGross, InputField::VatRate];
const SOURCING_FIELDS: [InputField; 2] =
    [InputField::UnitProductCost, InputField::TransportCostUnit];
const DUTY_FIELDS: [InputField; 2] = [
    InputField::CustomsDutyPercent,
    InputField::CustomsDutyFixed,
];
const MARKETPLACE_FIELDS: [InputField; 3] = [
    InputField::FbaFee,
    InputField::ReferralFeeRate,
    InputField::OtherCostsUnit,
];
const SALES_FIELDS: [InputField; 2] = [
    InputField::MarketingSpendRate,
    InputField::MonthlySalesUnits,
];

#[component]
pub fn CalculatorPage() -> Element {
    let mut inputs = use_signal(|| InputRecord::from_defaults(&defaults_or_builtin()));

    // Full recomputation on every render; the form is the only state.
    let record = inputs();
    let outputs = compute_metrics(&record);
    let chart = build_chart(&record, &outputs);

    tracing::debug!(
        net = outputs.net_selling_price,
        profit = outputs.profit_post_marketing,
        margin = outputs.margin,
        roi = outputs.roi,
        "metrics recomputed"
    );

    let on_duty_type = move |evt: FormEvent| match evt.value().parse::<DutyType>() {
        Ok(duty_type) => {
            tracing::debug!(%duty_type, "duty type changed");
            inputs.with_mut(|st| st.duty_type = duty_type);
        }
        Err(err) => tracing::warn!(error = %err, "ignoring duty type selection"),
    };

    rsx! {
        div { class: "kpi-grid",
            KpiCard {
                title: "Profit per unit".to_string(),
                value: format_currency(outputs.profit_post_marketing),
                description: Some("after marketing".to_string()),
                tone: ProfitTone::of(outputs.profit_post_marketing),
            }
            KpiCard {
                title: "Margin".to_string(),
                value: format_percent(outputs.margin),
                description: Some("of net selling price".to_string()),
                tone: ProfitTone::of(outputs.margin),
            }
            KpiCard {
                title: "ROI".to_string(),
                value: format_percent(outputs.roi),
                description: Some("on landed cost".to_string()),
                tone: ProfitTone::of(outputs.roi),
            }
            KpiCard {
                title: "Monthly profit".to_string(),
                value: format_currency(outputs.total_monthly_profit),
                tone: ProfitTone::of(outputs.total_monthly_profit),
            }
        }

        div { class: "layout",
            form {
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                section { class: "panel",
                    h2 { class: "panel-title", "Pricing" }
                    for field in PRICING_FIELDS {
                        NumberField {
                            key: "{field.label()}",
                            field,
                            value: record.get(field).to_string(),
                            on_input: move |text: String| update_field(inputs, field, text),
                        }
                    }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "Sourcing" }
                    for field in SOURCING_FIELDS {
                        NumberField {
                            key: "{field.label()}",
                            field,
                            value: record.get(field).to_string(),
                            on_input: move |text: String| update_field(inputs, field, text),
                        }
                    }
                    label { class: "field",
                        span { class: "field-label", "Customs duty type" }
                        select {
                            class: "field-input",
                            value: "{record.duty_type}",
                            onchange: on_duty_type,
                            for duty_type in [DutyType::Percent, DutyType::Fixed] {
                                option {
                                    key: "{duty_type}",
                                    value: "{duty_type}",
                                    selected: record.duty_type == duty_type,
                                    "{duty_type.label()}"
                                }
                            }
                        }
                    }
                    for field in DUTY_FIELDS.into_iter().filter(|f| f.is_active(record.duty_type)) {
                        NumberField {
                            key: "{field.label()}",
                            field,
                            value: record.get(field).to_string(),
                            on_input: move |text: String| update_field(inputs, field, text),
                        }
                    }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "Amazon" }
                    for field in MARKETPLACE_FIELDS {
                        NumberField {
                            key: "{field.label()}",
                            field,
                            value: record.get(field).to_string(),
                            on_input: move |text: String| update_field(inputs, field, text),
                        }
                    }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "Sales" }
                    for field in SALES_FIELDS {
                        NumberField {
                            key: "{field.label()}",
                            field,
                            value: record.get(field).to_string(),
                            on_input: move |text: String| update_field(inputs, field, text),
                        }
                    }
                }
            }

            div {
                section { class: "panel",
                    h2 { class: "panel-title", "Results per unit" }
                    ResultsTable { outputs }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "Price breakdown" }
                    BreakdownChart { view: chart }
                }
            }
        }
    }
}

fn update_field(mut inputs: Signal<InputRecord>, field: InputField, text: String) {
    tracing::trace!(?field, %text, "input changed");
    inputs.with_mut(|st| st.set(field, text));
}
