//! Calculation core: input parsing, unit economics and the chart projection.

pub mod chart;
pub mod inputs;
pub mod metrics;
pub mod parse;

#[allow(unused_imports)]
pub use chart::{build_chart, ChartSlice, ChartView, SliceKind, CHART_CENTER};
#[allow(unused_imports)]
pub use inputs::{DutyType, InputField, InputRecord, ParseDutyTypeError};
#[allow(unused_imports)]
pub use metrics::{compute_metrics, OutputRecord, ProfitTone};
#[allow(unused_imports)]
pub use parse::parse_number;
