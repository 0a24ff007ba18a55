//! Projection of the calculation results into a proportional cost/profit
//! breakdown for the donut chart.

use std::f64::consts::{PI, TAU};

use super::inputs::InputRecord;
use super::metrics::OutputRecord;
use super::parse::parse_number;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceKind {
    LandedCost,
    AmazonFees,
    Marketing,
    OtherCosts,
    Profit,
}

impl SliceKind {
    pub const ALL: [SliceKind; 5] = [
        SliceKind::LandedCost,
        SliceKind::AmazonFees,
        SliceKind::Marketing,
        SliceKind::OtherCosts,
        SliceKind::Profit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SliceKind::LandedCost => "Landed cost",
            SliceKind::AmazonFees => "Amazon fees",
            SliceKind::Marketing => "Marketing",
            SliceKind::OtherCosts => "Other costs",
            SliceKind::Profit => "Profit",
        }
    }

    /// CSS custom property holding the slice colour.
    pub fn color_var(&self) -> &'static str {
        match self {
            SliceKind::LandedCost => "var(--slice-landed)",
            SliceKind::AmazonFees => "var(--slice-fees)",
            SliceKind::Marketing => "var(--slice-marketing)",
            SliceKind::OtherCosts => "var(--slice-other)",
            SliceKind::Profit => "var(--slice-profit)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub kind: SliceKind,
    pub value: f64,
    /// Fraction of the total, in `0.0..=1.0`.
    pub share: f64,
    /// SVG path of the donut segment in a 200x200 viewbox.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartView {
    Breakdown { slices: Vec<ChartSlice>, total: f64 },
    /// Profit is negative (or unknown); a proportional chart cannot show it.
    LossNotice,
    /// Nothing to split yet.
    Empty,
}

pub const CHART_CENTER: f64 = 100.0;
const OUTER_RADIUS: f64 = 90.0;
const INNER_RADIUS: f64 = 56.0;

pub fn build_chart(inputs: &InputRecord, outputs: &OutputRecord) -> ChartView {
    // NaN fails this comparison too.
    if !(outputs.profit_post_marketing >= 0.0) {
        return ChartView::LossNotice;
    }

    let other_costs = parse_number(&inputs.other_costs_unit);
    let magnitudes = SliceKind::ALL.map(|kind| {
        let value = match kind {
            SliceKind::LandedCost => outputs.landed_cost_unit,
            SliceKind::AmazonFees => outputs.amazon_fees,
            SliceKind::Marketing => outputs.marketing_cost_unit,
            SliceKind::OtherCosts => other_costs,
            SliceKind::Profit => outputs.profit_post_marketing,
        };
        (kind, magnitude(value))
    });

    let total: f64 = magnitudes.iter().map(|(_, value)| value).sum();
    if !(total > 0.0) || !total.is_finite() {
        return ChartView::Empty;
    }

    let mut start = 0.0;
    let slices = magnitudes
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(kind, value)| {
            let share = value / total;
            let sweep = share * TAU;
            let path = donut_segment(start, start + sweep);
            start += sweep;
            ChartSlice {
                kind,
                value,
                share,
                path,
            }
        })
        .collect();

    ChartView::Breakdown { slices, total }
}

fn magnitude(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Donut segment between two angles measured clockwise from 12 o'clock.
fn donut_segment(start: f64, end: f64) -> String {
    // A closed arc has identical end points and would not render.
    let end = end.min(start + TAU - 1e-4);
    let large_arc = if end - start > PI { 1 } else { 0 };

    let (ox0, oy0) = point_at(OUTER_RADIUS, start);
    let (ox1, oy1) = point_at(OUTER_RADIUS, end);
    let (ix1, iy1) = point_at(INNER_RADIUS, end);
    let (ix0, iy0) = point_at(INNER_RADIUS, start);

    format!(
        "M {ox0:.3} {oy0:.3} A {OUTER_RADIUS} {OUTER_RADIUS} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {INNER_RADIUS} {INNER_RADIUS} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

fn point_at(radius: f64, angle: f64) -> (f64, f64) {
    (
        CHART_CENTER + radius * angle.sin(),
        CHART_CENTER - radius * angle.cos(),
    )
}
