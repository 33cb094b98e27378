//! show_bank_statement command

use anyhow::{Context, Result};
use minibank_core::Ledger;
use minibank_reports::{ReportExporter, StatementBuilder};

/// Show transactions for chosen dates, rendered by `exporter`
pub fn show_bank_statement(
    ledger: &mut Ledger,
    builder: &StatementBuilder,
    exporter: &dyn ReportExporter,
    client: &str,
    since: &str,
    till: &str,
) -> Result<String> {
    let report = builder
        .build_from_text(ledger, client, since, till)
        .with_context(|| format!("Cannot build bank statement for '{}'", client))?;

    let output = exporter.export(&report);
    Ok(output.trim_end().to_string())
}
