//! # Minibank Reports
//!
//! Bank statements and report exporters.
//!
//! ## Statements
//!
//! - [`StatementBuilder`] - builds a [`StatementReport`] for one client and
//!   a `[since, till]` range with an explicit rounding rule
//!
//! ## Exporters
//!
//! - [`TableExporter`] - bordered text table
//! - [`CsvExporter`] - comma separated, with a header line
//! - [`JsonExporter`] - pretty-printed JSON
//! - [`MarkdownExporter`] - summary list plus a pipe table
//!
//! ## Example
//!
//! ```rust,ignore
//! use minibank_core::Ledger;
//! use minibank_reports::{ReportExporter, StatementBuilder, TableExporter};
//!
//! let mut ledger = Ledger::new();
//! ledger.deposit_str("Alice", "100", "salary")?;
//! let report = StatementBuilder::default().build_from_text(
//!     &mut ledger,
//!     "Alice",
//!     "2021-01-01 00:00:00",
//!     "2030-01-01 00:00:00",
//! )?;
//! println!("{}", TableExporter::new().export(&report));
//! ```

pub mod exporters;
pub mod statement;

// Re-export main types
pub use exporters::{
    CsvExporter, JsonExporter, MarkdownExporter, ReportData, ReportExporter, TableExporter,
};

pub use statement::{StatementBuilder, StatementReport, StatementRow, StatementTotals};
