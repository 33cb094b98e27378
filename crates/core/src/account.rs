//! # Account Module
//!
//! Định nghĩa Account - sổ tài khoản của một client.
//! Account giữ số dư hiện tại và lịch sử giao dịch theo thứ tự ghi nhận;
//! chỉ thay đổi qua `deposit` / `withdraw`.

use crate::datetime::Instant;
use crate::error::CoreResult;
use crate::money::{ensure_positive, Money};
use crate::time_range::TimeRange;
use crate::transaction::{Transaction, TransactionKind};
use serde::Serialize;
use std::fmt;

/// Tài khoản của một client.
///
/// Bất biến: `balance` luôn bằng `resulting_balance` của giao dịch được
/// append gần nhất (hoặc 0 nếu chưa có giao dịch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Tên client (khóa duy nhất trong Ledger)
    client: String,
    /// Số dư hiện tại, chưa làm tròn
    balance: Money,
    /// Giao dịch theo thứ tự append
    transactions: Vec<Transaction>,
}

impl Account {
    /// Tạo Account mới với số dư 0
    pub fn new(client: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            balance: Money::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    /// Số dư hiện tại
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Toàn bộ giao dịch theo thứ tự append
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Nạp tiền
    pub fn deposit(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        self.record(TransactionKind::Deposit, amount, description.into(), at)
    }

    /// Rút tiền (không chặn số dư âm)
    pub fn withdraw(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        self.record(TransactionKind::Withdraw, amount, description.into(), at)
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: String,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        let amount = ensure_positive(amount)?;
        let transaction = Transaction::new(self, amount, description, kind, at)?;

        tracing::debug!(
            client = %self.client,
            kind = %kind,
            amount = %amount,
            balance = %transaction.resulting_balance(),
            "transaction recorded"
        );
        if transaction.resulting_balance().is_negative() {
            tracing::warn!(
                client = %self.client,
                balance = %transaction.resulting_balance(),
                "balance is negative"
            );
        }

        self.balance = transaction.resulting_balance();
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Giao dịch nằm trong `range`, sắp xếp tăng dần theo `created_at`.
    ///
    /// Sort ổn định: các giao dịch cùng thời điểm giữ thứ tự append.
    pub fn transactions(&self, range: &TimeRange) -> Vec<&Transaction> {
        let mut selected: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| range.contains(&t.created_at()))
            .collect();
        selected.sort_by_key(|t| t.created_at());
        selected
    }

    /// Số dư tại thời điểm `instant`.
    ///
    /// `None` -> số dư hiện tại. Ngược lại là `resulting_balance` của giao
    /// dịch cuối cùng có `created_at <= instant`, hoặc 0 nếu không có.
    pub fn balance_at(&self, instant: Option<Instant>) -> Money {
        match instant {
            None => self.balance,
            Some(instant) => self
                .transactions(&TimeRange::till(instant))
                .last()
                .map(|t| t.resulting_balance())
                .unwrap_or(Money::ZERO),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (balance: {}, transactions: {})",
            self.client,
            self.balance,
            self.transactions.len()
        )
    }
}
