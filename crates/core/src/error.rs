//! # Error Module
//!
//! Định nghĩa các domain errors cho Minibank sử dụng thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Các lỗi nghiệp vụ cốt lõi: số tiền không hợp lệ, tràn số khi cộng dồn
/// số dư, và lỗi parse dữ liệu đầu vào dạng text (amount, datetime).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // === Money errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount overflow: {0}")]
    Overflow(String),

    // === Boundary errors ===
    #[error("Cannot parse {what} from '{input}'")]
    ParseError { what: &'static str, input: String },
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Tạo lỗi parse cho một giá trị text
    pub fn parse(what: &'static str, input: &str) -> Self {
        CoreError::ParseError {
            what,
            input: input.to_string(),
        }
    }

    /// Kiểm tra có phải lỗi invalid amount không
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, CoreError::InvalidAmount(_))
    }

    /// Kiểm tra có phải lỗi tràn số không
    pub fn is_overflow(&self) -> bool {
        matches!(self, CoreError::Overflow(_))
    }

    /// Kiểm tra có phải lỗi parse không
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CoreError::ParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidAmount("amount must be positive: -5".to_string());
        assert_eq!(err.to_string(), "Invalid amount: amount must be positive: -5");

        let err = CoreError::parse("datetime", "2021-13-01");
        assert_eq!(err.to_string(), "Cannot parse datetime from '2021-13-01'");
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::InvalidAmount("0".to_string());
        assert!(err.is_invalid_amount());
        assert!(!err.is_parse_error());

        let err = CoreError::parse("amount", "abc");
        assert!(err.is_parse_error());
        assert!(!err.is_invalid_amount());

        let err = CoreError::Overflow("1 + 2".to_string());
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "Amount overflow: 1 + 2");
    }
}
