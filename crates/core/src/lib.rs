//! # Minibank Core
//!
//! Mô hình sổ cái theo từng client: tiền Decimal chính xác, giao dịch
//! nạp / rút, số dư hiện tại và số dư tại một thời điểm, lọc theo
//! khoảng thời gian.
//!
//! ```
//! use minibank_core::{Ledger, Money, TimeRange};
//!
//! let mut ledger = Ledger::new();
//! ledger.deposit_str("Alice", "100.00", "salary").unwrap();
//! ledger.withdraw_str("Alice", "30.00", "groceries").unwrap();
//!
//! let account = ledger.account("Alice").unwrap();
//! assert_eq!(account.balance(), "70.00".parse::<Money>().unwrap());
//! assert_eq!(account.transactions(&TimeRange::unbounded()).len(), 2);
//! ```

pub mod account;
pub mod datetime;
pub mod error;
pub mod ledger;
pub mod money;
pub mod time_range;
pub mod transaction;

pub use account::Account;
pub use datetime::{format_datetime, parse_datetime, Instant, DATETIME_FORMAT};
pub use error::{CoreError, CoreResult};
pub use ledger::{Clock, Ledger, SystemClock};
pub use money::{ensure_positive, parse_amount, Money, Rounding, DISPLAY_DECIMALS};
pub use time_range::TimeRange;
pub use transaction::{Transaction, TransactionKind};
