//! Bank statement for one client over a date range.
//!
//! The statement is plain data: boundary balances, one row per transaction
//! and the withdrawal/deposit totals. Rendering is left to the exporters.

use chrono::NaiveDateTime;
use minibank_core::{
    format_datetime, parse_datetime, Account, CoreResult, Instant, Ledger, Money, Rounding,
    TimeRange, Transaction,
};
use serde::Serialize;

use crate::exporters::ReportData;

/// One transaction line of a statement. Amounts are already quantized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    pub timestamp: Instant,
    pub description: String,
    pub withdrawal: Option<Money>,
    pub deposit: Option<Money>,
    pub balance: Money,
}

impl StatementRow {
    fn from_transaction(tx: &Transaction, rounding: Rounding) -> Self {
        let amount = tx.amount().quantize(rounding);
        Self {
            timestamp: tx.created_at(),
            description: tx.description().to_string(),
            withdrawal: tx.is_withdraw().then_some(amount),
            deposit: tx.is_deposit().then_some(amount),
            balance: tx.resulting_balance().quantize(rounding),
        }
    }
}

/// Sums of the quantized withdrawal and deposit columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatementTotals {
    pub withdrawals: Money,
    pub deposits: Money,
}

/// Statement for `client` over `[since, till]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementReport {
    pub client: String,
    pub since: NaiveDateTime,
    pub till: NaiveDateTime,
    pub previous_balance: Money,
    pub final_balance: Money,
    pub rows: Vec<StatementRow>,
    pub totals: StatementTotals,
}

/// Builds [`StatementReport`]s with an explicit rounding rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    rounding: Rounding,
}

impl StatementBuilder {
    pub fn new(rounding: Rounding) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Statement for `client`, creating an empty account if it is unknown.
    ///
    /// `since > till` is accepted and yields a statement without rows.
    pub fn build(
        &self,
        ledger: &mut Ledger,
        client: &str,
        since: Instant,
        till: Instant,
    ) -> CoreResult<StatementReport> {
        let account = ledger.get_or_create(client);
        self.build_for_account(account, since, till)
    }

    /// Same as [`build`](Self::build) with both bounds given as
    /// `YYYY-MM-DD HH:MM:SS` text. Bounds are parsed before the ledger is
    /// touched.
    pub fn build_from_text(
        &self,
        ledger: &mut Ledger,
        client: &str,
        since: &str,
        till: &str,
    ) -> CoreResult<StatementReport> {
        let since = parse_datetime(since)?;
        let till = parse_datetime(till)?;
        self.build(ledger, client, since, till)
    }

    /// Read-only statement over an account.
    ///
    /// Fails only when a column total overflows.
    pub fn build_for_account(
        &self,
        account: &Account,
        since: Instant,
        till: Instant,
    ) -> CoreResult<StatementReport> {
        let rounding = self.rounding;
        let previous_balance = account.balance_at(Some(since)).quantize(rounding);
        let final_balance = account.balance_at(Some(till)).quantize(rounding);

        let rows: Vec<StatementRow> = account
            .transactions(&TimeRange::between(since, till))
            .into_iter()
            .map(|tx| StatementRow::from_transaction(tx, rounding))
            .collect();

        let zero = Money::ZERO.quantize(rounding);
        let totals = StatementTotals {
            withdrawals: zero.checked_sum(rows.iter().filter_map(|r| r.withdrawal))?,
            deposits: zero.checked_sum(rows.iter().filter_map(|r| r.deposit))?,
        };

        tracing::debug!(
            client = account.client(),
            rows = rows.len(),
            %previous_balance,
            %final_balance,
            "statement built"
        );

        Ok(StatementReport {
            client: account.client().to_string(),
            since,
            till,
            previous_balance,
            final_balance,
            rows,
            totals,
        })
    }
}

fn dollars(money: Money) -> String {
    format!("${}", money)
}

fn optional_dollars(money: Option<Money>) -> String {
    money.map(dollars).unwrap_or_default()
}

impl ReportData for StatementReport {
    fn title(&self) -> &str {
        &self.client
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Date".to_string(),
            "Description".to_string(),
            "Withdrawals".to_string(),
            "Deposits".to_string(),
            "Balance".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 2);
        rows.push(vec![
            String::new(),
            "Previous balance".to_string(),
            String::new(),
            String::new(),
            dollars(self.previous_balance),
        ]);
        for row in &self.rows {
            rows.push(vec![
                format_datetime(&row.timestamp),
                row.description.clone(),
                optional_dollars(row.withdrawal),
                optional_dollars(row.deposit),
                dollars(row.balance),
            ]);
        }
        rows.push(vec![
            String::new(),
            "Totals".to_string(),
            dollars(self.totals.withdrawals),
            dollars(self.totals.deposits),
            dollars(self.final_balance),
        ]);
        rows
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Client".to_string(), self.client.clone()),
            (
                "Period".to_string(),
                format!(
                    "{} - {}",
                    format_datetime(&self.since),
                    format_datetime(&self.till)
                ),
            ),
            ("Transactions".to_string(), self.rows.len().to_string()),
            ("Previous Balance".to_string(), dollars(self.previous_balance)),
            ("Final Balance".to_string(), dollars(self.final_balance)),
        ]
    }
}
