//! Optional parameters for list operations.

use std::collections::HashMap;

/// Optional parameters for record listing.
///
/// Every field is independently optional; a field that was never set is not
/// sent as a query parameter at all, so the server cannot distinguish
/// "absent" from "caller accepted the default". `filter` and `sort` are
/// opaque expressions forwarded verbatim; the client imposes no grammar on
/// them.
///
/// # Example
///
/// ```rust
/// use flexmodel_client::ListParams;
///
/// let params = ListParams::new()
///     .current(1)
///     .page_size(10)
///     .sort("create_time:desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    current: Option<u64>,
    page_size: Option<u64>,
    filter: Option<String>,
    nested_query: Option<bool>,
    sort: Option<String>,
}

impl ListParams {
    /// Creates params with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number to fetch.
    #[must_use]
    pub const fn current(mut self, current: u64) -> Self {
        self.current = Some(current);
        self
    }

    /// Sets the number of records per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets an opaque filter expression, forwarded unmodified.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets whether related records are resolved into the response.
    #[must_use]
    pub const fn nested_query(mut self, nested_query: bool) -> Self {
        self.nested_query = Some(nested_query);
        self
    }

    /// Sets an opaque sort expression, forwarded unmodified.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Returns a copy with the pagination fields cleared, for the
    /// single-call list shortcuts.
    #[must_use]
    pub(crate) fn without_pagination(&self) -> Self {
        Self {
            current: None,
            page_size: None,
            ..self.clone()
        }
    }

    /// Renders the set fields as query parameters. Unset fields produce no
    /// key at all.
    pub(crate) fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(current) = self.current {
            query.insert("current".to_string(), current.to_string());
        }
        if let Some(page_size) = self.page_size {
            query.insert("pageSize".to_string(), page_size.to_string());
        }
        if let Some(filter) = &self.filter {
            query.insert("filter".to_string(), filter.clone());
        }
        if let Some(nested_query) = self.nested_query {
            query.insert("nestedQuery".to_string(), nested_query.to_string());
        }
        if let Some(sort) = &self.sort {
            query.insert("sort".to_string(), sort.clone());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_render_no_keys() {
        assert!(ListParams::new().to_query().is_empty());
    }

    #[test]
    fn test_each_unset_field_is_absent_independently() {
        // Set the fields one at a time; the other keys must never appear.
        let cases: Vec<(ListParams, &str)> = vec![
            (ListParams::new().current(2), "current"),
            (ListParams::new().page_size(50), "pageSize"),
            (ListParams::new().filter("age > 18"), "filter"),
            (ListParams::new().nested_query(true), "nestedQuery"),
            (ListParams::new().sort("name:asc"), "sort"),
        ];
        for (params, expected_key) in cases {
            let query = params.to_query();
            assert_eq!(query.len(), 1, "only `{expected_key}` should be present");
            assert!(query.contains_key(expected_key));
        }
    }

    #[test]
    fn test_set_fields_render_wire_names_and_values() {
        let query = ListParams::new()
            .current(1)
            .page_size(10)
            .filter("status = 'open'")
            .nested_query(false)
            .sort("id:desc")
            .to_query();

        assert_eq!(query.get("current"), Some(&"1".to_string()));
        assert_eq!(query.get("pageSize"), Some(&"10".to_string()));
        assert_eq!(query.get("filter"), Some(&"status = 'open'".to_string()));
        assert_eq!(query.get("nestedQuery"), Some(&"false".to_string()));
        assert_eq!(query.get("sort"), Some(&"id:desc".to_string()));
    }

    #[test]
    fn test_without_pagination_keeps_other_fields() {
        let params = ListParams::new()
            .current(3)
            .page_size(20)
            .filter("x = 1")
            .sort("x:asc");
        let stripped = params.without_pagination();
        let query = stripped.to_query();

        assert!(!query.contains_key("current"));
        assert!(!query.contains_key("pageSize"));
        assert_eq!(query.get("filter"), Some(&"x = 1".to_string()));
        assert_eq!(query.get("sort"), Some(&"x:asc".to_string()));
    }
}
