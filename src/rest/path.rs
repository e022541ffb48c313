//! Path construction for record resources.
//!
//! All record operations address one of two path shapes, scoped by
//! datasource and model:
//!
//! - collection: `/api/f/datasources/{ds}/models/{model}/records`
//! - item: `/api/f/datasources/{ds}/models/{model}/records/{id}`
//!
//! Both the generic [`RecordsApi`](crate::rest::RecordsApi) and every typed
//! [`EntityApi`](crate::rest::EntityApi) build their paths through these
//! functions, so the two client layers can never disagree on addressing.

/// Escapes a path segment by replacing every `/` with `%2F`.
///
/// Only `/` is escaped. This is a deliberate narrowing, not a general
/// URL-encoding routine: datasource, model, and record identifiers are
/// expected to be plain names, and `/` is the only character that would
/// change the path structure.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    segment.replace('/', "%2F")
}

/// Returns the record-collection path for a `(datasource, model)` pair.
#[must_use]
pub fn collection_path(datasource: &str, model: &str) -> String {
    format!(
        "/api/f/datasources/{}/models/{}/records",
        encode_segment(datasource),
        encode_segment(model)
    )
}

/// Returns the record-item path for a `(datasource, model, id)` triple.
#[must_use]
pub fn item_path(datasource: &str, model: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection_path(datasource, model),
        encode_segment(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path_plain_names() {
        assert_eq!(
            collection_path("sales", "order"),
            "/api/f/datasources/sales/models/order/records"
        );
    }

    #[test]
    fn test_item_path_appends_encoded_id() {
        assert_eq!(
            item_path("sales", "order", "42"),
            "/api/f/datasources/sales/models/order/records/42"
        );
    }

    #[test]
    fn test_slashes_in_components_are_escaped() {
        let path = item_path("a/b", "c/d", "e/f");
        assert_eq!(
            path,
            "/api/f/datasources/a%2Fb/models/c%2Fd/records/e%2Ff"
        );
        // Exactly the structural delimiters remain.
        assert_eq!(path.matches('/').count(), 8);
    }

    #[test]
    fn test_no_other_characters_are_escaped() {
        // Spaces, unicode, and reserved characters pass through untouched.
        assert_eq!(encode_segment("hello world?&=#"), "hello world?&=#");
        assert_eq!(encode_segment("模型"), "模型");
    }

    #[test]
    fn test_repeated_slashes() {
        assert_eq!(encode_segment("a//b"), "a%2F%2Fb");
    }
}
