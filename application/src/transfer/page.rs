use kernel::prelude::entity::{PageNumber, SelectLimit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

impl<T> PageDto<T> {
    pub fn new(items: Vec<T>, page: &PageNumber, limit: &SelectLimit, total: i64) -> Self {
        Self {
            items,
            page: *page.as_ref(),
            page_size: *limit.as_ref(),
            total: total.max(0),
        }
    }

    /// An empty listing still has one (empty) page.
    pub fn num_pages(&self) -> i64 {
        if self.total == 0 || self.page_size <= 0 {
            return 1;
        }
        (self.total + self.page_size - 1) / self.page_size
    }

    pub fn is_paginated(&self) -> bool {
        self.num_pages() > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageDto<U> {
        PageDto {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{PageNumber, SelectLimit};

    use super::PageDto;

    #[test]
    fn counts_pages_rounding_up() {
        let page = PageDto::new(vec![1, 2, 3, 4], &PageNumber::new(1), &SelectLimit::new(4), 9);
        assert_eq!(page.num_pages(), 3);
        assert!(page.is_paginated());
    }

    #[test]
    fn empty_listing_is_single_page() {
        let page = PageDto::<i32>::new(vec![], &PageNumber::new(1), &SelectLimit::new(10), 0);
        assert_eq!(page.num_pages(), 1);
        assert!(!page.is_paginated());
    }
}
