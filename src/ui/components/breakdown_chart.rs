use dioxus::prelude::*;

use crate::{
    domain::{ChartView, CHART_CENTER},
    util::format::{format_currency, format_percent},
};

#[component]
pub fn BreakdownChart(view: ChartView) -> Element {
    match view {
        ChartView::Breakdown { slices, total } => rsx! {
            div { class: "chart",
                svg {
                    view_box: "0 0 200 200",
                    for slice in slices.iter() {
                        path {
                            key: "{slice.kind.label()}",
                            d: "{slice.path}",
                            fill: slice.kind.color_var(),
                        }
                    }
                    text {
                        class: "chart-total",
                        x: "{CHART_CENTER}",
                        y: "{CHART_CENTER}",
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        "{format_currency(total)}"
                    }
                }
                ul { class: "chart-legend",
                    for slice in slices.iter() {
                        li { key: "{slice.kind.label()}",
                            span {
                                class: "legend-swatch",
                                style: "background: {slice.kind.color_var()}",
                            }
                            span { "{slice.kind.label()}" }
                            span { class: "legend-share",
                                "{format_percent(slice.share * 100.0)} · {format_currency(slice.value)}"
                            }
                        }
                    }
                }
            }
        },
        ChartView::LossNotice => rsx! {
            div { class: "notice notice-loss",
                "This product loses money per unit. The breakdown chart is only shown for non-negative profit."
            }
        },
        ChartView::Empty => rsx! {
            div { class: "notice", "Enter a selling price and costs to see the breakdown." }
        },
    }
}
