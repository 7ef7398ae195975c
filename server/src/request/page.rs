use serde::Deserialize;

use kernel::prelude::entity::PageNumber;

/// `?page=N` on list routes; absent means the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    page: Option<i64>,
}

impl PageRequest {
    pub fn new(page: Option<i64>) -> Self {
        Self { page }
    }

    pub fn page_number(&self) -> PageNumber {
        self.page.map(PageNumber::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::PageNumber;

    use super::PageRequest;

    #[test]
    fn missing_page_is_first() {
        assert_eq!(PageRequest::default().page_number(), PageNumber::new(1));
        assert_eq!(PageRequest::new(Some(3)).page_number(), PageNumber::new(3));
        assert_eq!(PageRequest::new(Some(0)).page_number(), PageNumber::new(1));
    }
}
