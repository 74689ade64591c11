use serde::{Deserialize, Serialize};

/// One bounded page of an ordered result set, offset style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_items: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages =
            u32::try_from(total_items.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX);
        let has_more = page < total_pages;
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_more,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_more: self.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_counts_round_up() {
        let page = Page::new(vec![1, 2], 1, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);
    }

    #[test]
    fn last_page_has_no_more() {
        let page = Page::new(vec![5], 3, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn empty_result_is_a_valid_page() {
        let page = Page::<i32>::new(vec![], 1, 20, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }
}
