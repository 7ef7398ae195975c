use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectLimit(i64);

impl SelectLimit {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectLimit(value.into())
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(10)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct SelectOffset(i64);

impl SelectOffset {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectOffset(value.into())
    }
}

/// One-based page number as it appears in `?page=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PageNumber(i64);

impl PageNumber {
    /// Values below one are clamped to the first page.
    pub fn new(value: impl Into<i64>) -> Self {
        PageNumber(value.into().max(1))
    }

    pub fn offset(&self, limit: &SelectLimit) -> SelectOffset {
        SelectOffset::new((self.0 - 1).saturating_mul(*limit.as_ref()))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod test {
    use super::{PageNumber, SelectLimit, SelectOffset};

    #[test]
    fn first_page_starts_at_zero() {
        let limit = SelectLimit::new(4);
        assert_eq!(PageNumber::default().offset(&limit), SelectOffset::new(0));
    }

    #[test]
    fn offset_skips_previous_pages() {
        let limit = SelectLimit::new(10);
        assert_eq!(PageNumber::new(3).offset(&limit), SelectOffset::new(20));
    }

    #[test]
    fn non_positive_page_is_clamped() {
        assert_eq!(PageNumber::new(0), PageNumber::new(1));
        assert_eq!(PageNumber::new(-7), PageNumber::new(1));
    }
}
