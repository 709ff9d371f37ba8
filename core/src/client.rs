//! Stateless request builder and response parser for the echo service.
//!
//! # Design
//! `EchoClient` holds only a `base_url`. Each remote operation is split into
//! a `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the `Transport` runs the round-trip in
//! between.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::JsonMap;

pub const DEFAULT_BASE_URL: &str = "https://httpbin.org";

/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct EchoClient {
    base_url: String,
}

impl Default for EchoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EchoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_ip_info(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/ip", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Any JSON value is accepted as the body; the echo service does not
    /// require an object.
    pub fn build_post_data(&self, payload: &Value) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/post", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_ip_info(&self, response: HttpResponse) -> Result<JsonMap, ApiError> {
        parse_object(response)
    }

    pub fn parse_post_data(&self, response: HttpResponse) -> Result<JsonMap, ApiError> {
        parse_object(response)
    }
}

/// Reject non-2xx responses, then require the body to be a JSON object.
fn parse_object(response: HttpResponse) -> Result<JsonMap, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    match serde_json::from_str(&response.body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::DeserializationError(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
        Err(e) => Err(ApiError::DeserializationError(e.to_string())),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> EchoClient {
        EchoClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn default_points_at_httpbin() {
        assert_eq!(EchoClient::default().build_ip_info().url, "https://httpbin.org/ip");
    }

    #[test]
    fn build_ip_info_produces_correct_request() {
        let req = client().build_ip_info();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/ip");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_post_data_produces_correct_request() {
        let payload = json!({"test": "data", "n": 1});
        let req = client()
            .build_post_data(&payload)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/post");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, payload);
    }

    #[test]
    fn build_post_data_accepts_non_object_payloads() {
        let req = client().build_post_data(&json!([1, 2])).unwrap();
        assert_eq!(req.body.as_deref(), Some("[1,2]"));
        let req = client().build_post_data(&json!("x")).unwrap();
        assert_eq!(req.body.as_deref(), Some("\"x\""));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EchoClient::new("http://localhost:3000/");
        assert_eq!(client.build_ip_info().url, "http://localhost:3000/ip");
    }

    #[test]
    fn parse_ip_info_success() {
        let map = client().parse_ip_info(ok(r#"{"origin":"127.0.0.1"}"#)).unwrap();
        assert_eq!(Value::Object(map), json!({"origin": "127.0.0.1"}));
    }

    #[test]
    fn parse_accepts_any_2xx() {
        let response = HttpResponse {
            status: 201,
            body: "{}".to_string(),
        };
        assert!(client().parse_post_data(response).unwrap().is_empty());
    }

    #[test]
    fn parse_post_data_returns_body_unmodified() {
        let body = r#"{"json":{"test":"data"},"status":"ok"}"#;
        let map = client().parse_post_data(ok(body)).unwrap();
        assert_eq!(
            Value::Object(map),
            json!({"json": {"test": "data"}, "status": "ok"})
        );
    }

    #[test]
    fn parse_maps_non_2xx_to_http_error() {
        let response = HttpResponse {
            status: 503,
            body: "unavailable".to_string(),
        };
        let err = client().parse_ip_info(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, ref body } if body == "unavailable"));
    }

    #[test]
    fn parse_rejects_bad_json() {
        let err = client().parse_ip_info(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_rejects_non_object_json() {
        let err = client().parse_post_data(ok("[1, 2]")).unwrap_err();
        match err {
            ApiError::DeserializationError(msg) => assert!(msg.contains("an array")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
