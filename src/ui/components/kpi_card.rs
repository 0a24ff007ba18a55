use dioxus::prelude::*;

use crate::domain::ProfitTone;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, tone: ProfitTone) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value {theme::tone_class(tone)}", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
