pub mod document_table;
pub mod facts_chart;

pub use document_table::DocumentTable;
pub use facts_chart::FactsChart;
