//! # Ledger Module
//!
//! Registry client -> Account. Đường ghi duy nhất là get-or-create rồi
//! deposit / withdraw; account không bao giờ bị xóa.

use crate::account::Account;
use crate::datetime::Instant;
use crate::error::CoreResult;
use crate::money::{ensure_positive, parse_amount, Money};
use crate::transaction::{Transaction, TransactionKind};
use chrono::{Local, SubsecRound};
use std::collections::HashMap;
use std::fmt;

/// Nguồn thời gian `created_at` cho giao dịch mới.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Giờ địa phương, cắt về đơn vị giây.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Sổ cái in-memory chứa mọi account của client.
pub struct Ledger {
    accounts: HashMap<String, Account>,
    clock: Box<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Ledger rỗng, dùng đồng hồ hệ thống
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Ledger rỗng với clock tùy chọn
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            accounts: HashMap::new(),
            clock: Box::new(clock),
        }
    }

    /// Lấy account của `client`, tạo account rỗng nếu chưa có.
    pub fn get_or_create(&mut self, client: &str) -> &mut Account {
        self.accounts.entry(client.to_string()).or_insert_with(|| {
            tracing::info!(client, "account created");
            Account::new(client)
        })
    }

    /// Tìm account đã có, không tạo mới
    pub fn account(&self, client: &str) -> Option<&Account> {
        self.accounts.get(client)
    }

    pub fn clients(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Nạp `amount` cho `client`, thời điểm lấy từ clock của ledger.
    pub fn deposit(
        &mut self,
        client: &str,
        amount: Money,
        description: &str,
    ) -> CoreResult<&Transaction> {
        let at = self.clock.now();
        self.record_at(TransactionKind::Deposit, client, amount, description, at)
    }

    /// Rút `amount` của `client`, thời điểm lấy từ clock của ledger.
    pub fn withdraw(
        &mut self,
        client: &str,
        amount: Money,
        description: &str,
    ) -> CoreResult<&Transaction> {
        let at = self.clock.now();
        self.record_at(TransactionKind::Withdraw, client, amount, description, at)
    }

    /// Nạp tiền với thời điểm chỉ định
    pub fn deposit_at(
        &mut self,
        client: &str,
        amount: Money,
        description: &str,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        self.record_at(TransactionKind::Deposit, client, amount, description, at)
    }

    /// Rút tiền với thời điểm chỉ định
    pub fn withdraw_at(
        &mut self,
        client: &str,
        amount: Money,
        description: &str,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        self.record_at(TransactionKind::Withdraw, client, amount, description, at)
    }

    /// Nạp tiền, số tiền dạng text
    pub fn deposit_str(
        &mut self,
        client: &str,
        amount: &str,
        description: &str,
    ) -> CoreResult<&Transaction> {
        let amount = parse_amount(amount)?;
        self.deposit(client, amount, description)
    }

    /// Rút tiền, số tiền dạng text
    pub fn withdraw_str(
        &mut self,
        client: &str,
        amount: &str,
        description: &str,
    ) -> CoreResult<&Transaction> {
        let amount = parse_amount(amount)?;
        self.withdraw(client, amount, description)
    }

    fn record_at(
        &mut self,
        kind: TransactionKind,
        client: &str,
        amount: Money,
        description: &str,
        at: Instant,
    ) -> CoreResult<&Transaction> {
        // Request không hợp lệ không được tạo account
        let amount = ensure_positive(amount)?;
        let account = self.get_or_create(client);
        match kind {
            TransactionKind::Deposit => account.deposit(amount, description, at),
            TransactionKind::Withdraw => account.withdraw(amount, description, at),
        }
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("accounts", &self.accounts)
            .finish_non_exhaustive()
    }
}
