//! Khoảng thời gian đóng, mỗi đầu có thể để mở.

use crate::datetime::Instant;

/// Khoảng thời gian dùng để lọc giao dịch.
///
/// Thiếu một đầu nghĩa là khoảng mở về phía đó:
/// - không có đầu nào: chứa mọi thời điểm
/// - chỉ `till`: `instant <= till`
/// - chỉ `since`: `since <= instant`
/// - cả hai: `since <= instant <= till`
///
/// `since > till` không bị từ chối; khoảng đó không chứa gì.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeRange {
    since: Option<Instant>,
    till: Option<Instant>,
}

impl TimeRange {
    pub fn new(since: Option<Instant>, till: Option<Instant>) -> Self {
        Self { since, till }
    }

    /// Khoảng không giới hạn
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `[since, +inf)`
    pub fn since(since: Instant) -> Self {
        Self::new(Some(since), None)
    }

    /// `(-inf, till]`
    pub fn till(till: Instant) -> Self {
        Self::new(None, Some(till))
    }

    /// `[since, till]`
    pub fn between(since: Instant, till: Instant) -> Self {
        Self::new(Some(since), Some(till))
    }

    pub fn lower(&self) -> Option<Instant> {
        self.since
    }

    pub fn upper(&self) -> Option<Instant> {
        self.till
    }

    pub fn contains(&self, instant: &Instant) -> bool {
        match (&self.since, &self.till) {
            (None, None) => true,
            (None, Some(till)) => instant <= till,
            (Some(since), None) => since <= instant,
            (Some(since), Some(till)) => since <= instant && instant <= till,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> Instant {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let range = TimeRange::unbounded();
        assert!(range.contains(&at(1, 0)));
        assert!(range.contains(&NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_open_lower_bound() {
        let range = TimeRange::till(at(10, 12));
        assert!(range.contains(&at(1, 0)));
        assert!(range.contains(&at(10, 12)));
        assert!(!range.contains(&at(10, 13)));
    }

    #[test]
    fn test_open_upper_bound() {
        let range = TimeRange::since(at(10, 12));
        assert!(!range.contains(&at(10, 11)));
        assert!(range.contains(&at(10, 12)));
        assert!(range.contains(&at(31, 23)));
    }

    #[test]
    fn test_bounded_is_inclusive() {
        let range = TimeRange::between(at(5, 0), at(6, 0));
        assert!(range.contains(&at(5, 0)));
        assert!(range.contains(&at(5, 12)));
        assert!(range.contains(&at(6, 0)));
        assert!(!range.contains(&at(4, 23)));
        assert!(!range.contains(&at(6, 1)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = TimeRange::between(at(6, 0), at(5, 0));
        assert!(!range.contains(&at(5, 0)));
        assert!(!range.contains(&at(5, 12)));
        assert!(!range.contains(&at(6, 0)));
    }
}
