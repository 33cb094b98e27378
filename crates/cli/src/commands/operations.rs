//! Ledger operations: deposit, withdraw

use anyhow::{Context, Result};
use minibank_core::Ledger;

/// Add deposit operation
pub fn deposit(ledger: &mut Ledger, client: &str, amount: &str, description: &str) -> Result<String> {
    let tx = ledger
        .deposit_str(client, amount, description)
        .with_context(|| format!("Deposit for '{}' failed", client))?;
    tracing::info!(client, amount = %tx.amount(), "deposit");

    Ok("Deposit operation was successful!".to_string())
}

/// Add withdrawal operation
pub fn withdraw(ledger: &mut Ledger, client: &str, amount: &str, description: &str) -> Result<String> {
    let tx = ledger
        .withdraw_str(client, amount, description)
        .with_context(|| format!("Withdrawal for '{}' failed", client))?;
    tracing::info!(client, amount = %tx.amount(), "withdraw");

    Ok("Withdrawal operation was successful!".to_string())
}
