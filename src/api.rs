//! Item Store Client
//!
//! `TodoApi` over browser fetch (gloo-net).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::models::{CreateTodoArgs, ErrorBody, Item};
use crate::sync::{ApiError, TodoApi};

/// Unreserved characters stay as-is in the query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `{base}/api/todos`, with `?client_id=` when scoped
pub fn todos_url(base: &str, client_id: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match client_id {
        Some(id) => format!(
            "{}/api/todos?client_id={}",
            base,
            utf8_percent_encode(id, QUERY_VALUE)
        ),
        None => format!("{}/api/todos", base),
    }
}

/// A list body that is not a JSON array counts as empty.
pub fn items_from_value(value: Value) -> Result<Vec<Item>, ApiError> {
    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTodoApi;

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn probe(&self, base: &str) -> Result<(), ApiError> {
        let response = Request::get(&todos_url(base, None))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&response)
    }

    async fn list_items(&self, base: &str, client_id: Option<&str>) -> Result<Vec<Item>, ApiError> {
        let response = Request::get(&todos_url(base, client_id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&response)?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        items_from_value(body)
    }

    async fn create_item(&self, base: &str, client_id: &str, text: &str) -> Result<(), ApiError> {
        let response = Request::post(&todos_url(base, Some(client_id)))
            .header("Accept", "application/json")
            .json(&CreateTodoArgs { text })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message: body.error,
            });
        }

        let _: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(())
    }
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            message: None,
        })
    }
}

fn network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urls() {
        assert_eq!(todos_url("http://localhost:8080", None), "http://localhost:8080/api/todos");
        assert_eq!(
            todos_url("http://localhost:8080/", Some("user_k3j_lx2")),
            "http://localhost:8080/api/todos?client_id=user_k3j_lx2"
        );
        assert_eq!(
            todos_url("http://h", Some("a b&c")),
            "http://h/api/todos?client_id=a%20b%26c"
        );
    }

    #[test]
    fn test_non_array_body_is_empty() {
        assert!(items_from_value(json!({"todos": []})).unwrap().is_empty());
        assert!(items_from_value(json!(null)).unwrap().is_empty());
        assert!(items_from_value(json!("oops")).unwrap().is_empty());
    }

    #[test]
    fn test_array_body_decodes() {
        let items = items_from_value(json!([
            {"id": 2, "text": "b", "created_at": "2024-05-01T10:00:00Z"},
            {"id": 1, "text": "a"}
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].created_at, "");
    }

    #[test]
    fn test_unusual_created_at_keeps_the_list() {
        let items = items_from_value(json!([
            {"id": 3, "text": "c", "created_at": null},
            {"id": 2, "text": "b", "created_at": 123},
            {"id": 1, "text": "a", "created_at": "2024-05-01T10:00:00Z"}
        ]))
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].created_at, "");
        assert_eq!(items[1].created_at, "123");
    }

    #[test]
    fn test_malformed_array_is_decode_error() {
        let result = items_from_value(json!([{"text": "no id"}]));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
