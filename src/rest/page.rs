//! Pagination container for list operations.

use serde::{Deserialize, Serialize};

/// One page of a list operation: the total matching count plus the items of
/// this page.
///
/// `total` is authoritative for the overall count and `items` for the
/// contents of the returned page only; `items.len()` is typically smaller
/// than `total`. When a backend reports inconsistent values the client
/// passes them through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records matching the query across all pages.
    pub total: u64,
    /// The records of this page, in server order.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Creates a page from a total count and its items.
    #[must_use]
    pub const fn new(total: u64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    /// Returns the number of items in this page (not the total count).
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Maps every item through a fallible conversion, keeping the total.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error encountered.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<_, E>>()?;
        Ok(Page {
            total: self.total,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_emptiness() {
        let page = Page::new(23, vec!["a", "b"]);
        assert_eq!(page.size(), 2);
        assert!(!page.is_empty());

        let empty: Page<&str> = Page::new(0, vec![]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_size_may_be_less_than_total() {
        let page = Page::new(23, vec![1, 2]);
        assert!(page.size() < usize::try_from(page.total).unwrap());
    }

    #[test]
    fn test_try_map_preserves_total() {
        let page = Page::new(5, vec!["1", "2"]);
        let mapped = page
            .try_map(|s| s.parse::<u32>())
            .expect("parse should succeed");
        assert_eq!(mapped.total, 5);
        assert_eq!(mapped.items, vec![1, 2]);
    }

    #[test]
    fn test_try_map_propagates_first_error() {
        let page = Page::new(3, vec!["1", "x", "3"]);
        assert!(page.try_map(|s| s.parse::<u32>()).is_err());
    }

    #[test]
    fn test_into_items() {
        let page = Page::new(2, vec![10, 20]);
        assert_eq!(page.into_items(), vec![10, 20]);
    }
}
