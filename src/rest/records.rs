//! Generic, untyped CRUD over arbitrary datasource/model pairs.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{ApiClient, ApiError};
use crate::rest::params::ListParams;
use crate::rest::path::{collection_path, item_path};
use crate::rest::Page;

/// A schema-free record: an ordered mapping of field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Generic records client: CRUD plus paginated listing over any
/// `(datasource, model)` pair, returning raw [`Record`]s.
///
/// All operations delegate to the shared [`ApiClient`] using the path
/// builder in [`crate::rest::path`], so the typed entity clients and this
/// client always address the same resources identically. No decoding, no
/// validation, no retries — every [`ApiError`] propagates unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use flexmodel_client::{FlexmodelClient, ListParams};
///
/// let client = FlexmodelClient::with_api_key("http://localhost:8080", "sales", "key");
/// let records = client.records();
/// let page = records
///     .list("sales", "order", &ListParams::new().page_size(10))
///     .await?;
/// println!("{} of {} orders", page.size(), page.total);
/// ```
#[derive(Debug, Clone)]
pub struct RecordsApi {
    client: Arc<ApiClient>,
}

impl RecordsApi {
    /// Creates a records client over the given transport.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists records as one page.
    ///
    /// Parameters left unset in `params` are not sent at all, so the server
    /// applies its own defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the response body does
    /// not have the `{ total, list }` page shape.
    pub async fn list(
        &self,
        datasource: &str,
        model: &str,
        params: &ListParams,
    ) -> Result<Page<Record>, ApiError> {
        let query = params.to_query();
        let query = if query.is_empty() { None } else { Some(&query) };
        let body = self
            .client
            .get(&collection_path(datasource, model), query)
            .await?;
        parse_page(body)
    }

    /// Lists records as a plain sequence, in a single call.
    ///
    /// Pagination parameters are omitted so the server returns its default
    /// page; this is a shortcut, not a full-collection fetch across pages.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn list_all(
        &self,
        datasource: &str,
        model: &str,
        params: &ListParams,
    ) -> Result<Vec<Record>, ApiError> {
        let page = self
            .list(datasource, model, &params.without_pagination())
            .await?;
        Ok(page.into_items())
    }

    /// Creates a record and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn create(
        &self,
        datasource: &str,
        model: &str,
        record: &Record,
    ) -> Result<Record, ApiError> {
        let body = self
            .client
            .post(
                &collection_path(datasource, model),
                &Value::Object(record.clone()),
            )
            .await?;
        into_record(body)
    }

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails (including 404).
    pub async fn get(
        &self,
        datasource: &str,
        model: &str,
        id: &str,
        nested_query: Option<bool>,
    ) -> Result<Record, ApiError> {
        let mut query = std::collections::HashMap::new();
        if let Some(nested) = nested_query {
            query.insert("nestedQuery".to_string(), nested.to_string());
        }
        let query = if query.is_empty() { None } else { Some(&query) };
        let body = self
            .client
            .get(&item_path(datasource, model, id), query)
            .await?;
        into_record(body)
    }

    /// Replaces a record in full (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn update(
        &self,
        datasource: &str,
        model: &str,
        id: &str,
        record: &Record,
    ) -> Result<Record, ApiError> {
        let body = self
            .client
            .put(
                &item_path(datasource, model, id),
                &Value::Object(record.clone()),
            )
            .await?;
        into_record(body)
    }

    /// Merges fields into a record (PATCH). Fields absent from `record` are
    /// left untouched on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn patch(
        &self,
        datasource: &str,
        model: &str,
        id: &str,
        record: &Record,
    ) -> Result<Record, ApiError> {
        let body = self
            .client
            .patch(
                &item_path(datasource, model, id),
                &Value::Object(record.clone()),
            )
            .await?;
        into_record(body)
    }

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn delete(&self, datasource: &str, model: &str, id: &str) -> Result<(), ApiError> {
        self.client.delete(&item_path(datasource, model, id)).await
    }
}

/// Parses a `{ total, list }` response into a page of raw records.
fn parse_page(body: Value) -> Result<Page<Record>, ApiError> {
    let Value::Object(mut map) = body else {
        return Err(ApiError::invalid_body("list response is not an object"));
    };
    let total = map
        .get("total")
        .and_then(Value::as_u64)
        .ok_or_else(|| ApiError::invalid_body("list response missing `total`"))?;
    let Some(Value::Array(list)) = map.remove("list") else {
        return Err(ApiError::invalid_body("list response missing `list`"));
    };
    let items = list
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => Ok(record),
            other => Err(ApiError::invalid_body(&format!(
                "list item is not an object: {other}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page::new(total, items))
}

/// Requires a response body to be a JSON object and returns it as a record.
fn into_record(body: Value) -> Result<Record, ApiError> {
    match body {
        Value::Object(record) => Ok(record),
        other => Err(ApiError::invalid_body(&format!(
            "record response is not an object: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_reads_total_and_list() {
        let page = parse_page(json!({
            "total": 23,
            "list": [{"id": "1"}, {"id": "2"}],
        }))
        .unwrap();
        assert_eq!(page.total, 23);
        assert_eq!(page.size(), 2);
        assert_eq!(page.items[0].get("id"), Some(&json!("1")));
    }

    #[test]
    fn test_parse_page_total_and_items_may_diverge() {
        // The client passes inconsistent backend answers through untouched.
        let page = parse_page(json!({"total": 0, "list": [{"id": "stale"}]})).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.size(), 1);
    }

    #[test]
    fn test_parse_page_rejects_missing_total() {
        let err = parse_page(json!({"list": []})).unwrap_err();
        assert!(err.message.contains("total"));
    }

    #[test]
    fn test_parse_page_rejects_non_object_body() {
        assert!(parse_page(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_into_record_rejects_non_object() {
        assert!(into_record(json!("nope")).is_err());
        assert!(into_record(json!({"id": "1"})).is_ok());
    }
}
