//! Tabular export for the risk register.
//!
//! Renders the five collections plus a computed summary into a CSV
//! "workbook" (one sheet per file) and a human-readable Markdown report.
//! Export is one-way; there is no round-trip import.

mod csv;
mod markdown;

pub use csv::CsvExporter;
pub use markdown::MarkdownReport;
