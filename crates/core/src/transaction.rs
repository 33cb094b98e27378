//! # Transaction Module
//!
//! Định nghĩa Transaction - một bút toán bất biến, kèm số dư ngay sau khi ghi.

use crate::account::Account;
use crate::datetime::Instant;
use crate::error::CoreResult;
use crate::money::{ensure_positive, Money};
use serde::Serialize;
use std::fmt;

/// Loại giao dịch: nạp hoặc rút, không bao giờ cả hai.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    /// Số dư sau khi áp dụng `amount` lên `balance`; tràn số -> `Overflow`
    pub fn apply(self, balance: Money, amount: Money) -> CoreResult<Money> {
        match self {
            TransactionKind::Deposit => balance.checked_add(amount),
            TransactionKind::Withdraw => balance.checked_sub(amount),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Một giao dịch nạp / rút đã ghi nhận.
///
/// Các field chỉ đọc sau khi tạo. `resulting_balance` được tính một lần từ
/// số dư của account sở hữu và không bao giờ tính lại.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    client: String,
    amount: Money,
    description: String,
    kind: TransactionKind,
    created_at: Instant,
    resulting_balance: Money,
}

impl Transaction {
    /// Tạo giao dịch dựa trên số dư hiện tại của `account`.
    ///
    /// `amount <= 0` -> `InvalidAmount`; số dư vượt giới hạn Decimal ->
    /// `Overflow`. Số dư được phép âm. Caller tự append kết quả.
    pub fn new(
        account: &Account,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
        created_at: Instant,
    ) -> CoreResult<Self> {
        let amount = ensure_positive(amount)?;
        let resulting_balance = kind.apply(account.balance(), amount)?;
        Ok(Self {
            client: account.client().to_string(),
            amount,
            description: description.into(),
            kind,
            created_at,
            resulting_balance,
        })
    }

    /// Khóa client của account sở hữu
    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Số dư account ngay sau giao dịch này
    pub fn resulting_balance(&self) -> Money {
        self.resulting_balance
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionKind::Deposit
    }

    pub fn is_withdraw(&self) -> bool {
        self.kind == TransactionKind::Withdraw
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) -> {}",
            self.created_at, self.kind, self.amount, self.description, self.resulting_balance
        )
    }
}
