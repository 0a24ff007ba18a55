pub mod breakdown_chart;
pub mod kpi_card;
pub mod number_field;
pub mod results_table;
