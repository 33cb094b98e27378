//! # Money Module
//!
//! Định nghĩa Money với rust_decimal để đảm bảo độ chính xác tuyệt đối,
//! và Rounding - quy tắc làm tròn được truyền tường minh vào mỗi lần
//! quantize (không dùng context toàn cục).

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Số chữ số thập phân khi hiển thị / báo cáo
pub const DISPLAY_DECIMALS: u32 = 2;

/// Quy tắc làm tròn khi quantize về [`DISPLAY_DECIMALS`] chữ số.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Giá trị ở giữa làm tròn về phía 0 (0.125 -> 0.12)
    #[default]
    HalfDown,
    /// Giá trị ở giữa làm tròn ra xa 0 (0.125 -> 0.13)
    HalfUp,
    /// Giá trị ở giữa làm tròn về số chẵn gần nhất (banker's rounding)
    HalfEven,
}

impl Rounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rounding::HalfDown => "half-down",
            Rounding::HalfUp => "half-up",
            Rounding::HalfEven => "half-even",
        }
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfDown => RoundingStrategy::MidpointTowardZero,
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Một số tiền, giữ nguyên độ chính xác đầy đủ bên trong.
///
/// Số dư được cộng dồn không làm tròn; chỉ [`Money::quantize`] khi giá trị
/// đi ra báo cáo.
///
/// # Examples
/// ```
/// use minibank_core::{Money, Rounding};
///
/// let amount: Money = "10.125".parse().unwrap();
/// assert_eq!(amount.quantize(Rounding::HalfDown).to_string(), "10.12");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Tạo Money mới
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Giá trị Decimal bên trong
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Kiểm tra có phải là số dương
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Kiểm tra có phải là 0
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Kiểm tra có phải là số âm
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Cộng hai số tiền; tràn số -> `Overflow` thay vì panic
    pub fn checked_add(self, rhs: Money) -> CoreResult<Money> {
        self.0
            .checked_add(rhs.0)
            .map(Money)
            .ok_or_else(|| CoreError::Overflow(format!("{} + {}", self, rhs)))
    }

    /// Trừ hai số tiền; tràn số -> `Overflow` thay vì panic
    pub fn checked_sub(self, rhs: Money) -> CoreResult<Money> {
        self.0
            .checked_sub(rhs.0)
            .map(Money)
            .ok_or_else(|| CoreError::Overflow(format!("{} - {}", self, rhs)))
    }

    /// Tổng một dãy số tiền, bắt đầu từ `self`
    pub fn checked_sum(self, items: impl IntoIterator<Item = Money>) -> CoreResult<Money> {
        items
            .into_iter()
            .try_fold(self, |total, item| total.checked_add(item))
    }

    /// Làm tròn về đúng 2 chữ số thập phân theo `rounding`.
    ///
    /// Scale luôn là 2 sau khi quantize, nên `100` hiển thị thành `100.00`.
    pub fn quantize(self, rounding: Rounding) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, rounding.strategy());
        rounded.rescale(DISPLAY_DECIMALS);
        Money(rounded)
    }
}

/// Kiểm tra số tiền giao dịch phải > 0
pub fn ensure_positive(amount: Money) -> CoreResult<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(CoreError::InvalidAmount(format!(
            "amount must be positive: {}",
            amount
        )))
    }
}

/// Parse số tiền từ text ở boundary (CLI).
///
/// Text không phải số -> `ParseError`; số <= 0 -> `InvalidAmount`.
pub fn parse_amount(raw: &str) -> CoreResult<Money> {
    let amount: Money = raw.parse()?;
    ensure_positive(amount)
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|_| CoreError::parse("amount", s))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
