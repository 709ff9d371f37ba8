use std::collections::BTreeMap;

use axum::{
    http::{HeaderMap, Uri},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// Origin reported when the request carries no `x-forwarded-for` header.
pub const LOOPBACK_ORIGIN: &str = "127.0.0.1";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpInfo {
    pub origin: String,
}

/// Shape of httpbin's `/post` reply, restricted to the fields the CLI reads
/// plus enough context to debug a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostEcho {
    pub args: Map<String, Value>,
    pub data: String,
    pub headers: BTreeMap<String, String>,
    pub json: Value,
    pub url: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/ip", get(ip))
        .route("/post", post(echo_post))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ip(headers: HeaderMap) -> Json<IpInfo> {
    let origin = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(LOOPBACK_ORIGIN)
        .to_string();
    debug!(%origin, "GET /ip");
    Json(IpInfo { origin })
}

async fn echo_post(uri: Uri, headers: HeaderMap, body: String) -> Json<PostEcho> {
    // httpbin reports `json: null` rather than rejecting a non-JSON body.
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    debug!(bytes = body.len(), "POST /post");
    Json(PostEcho {
        args: Map::new(),
        data: body,
        headers: collect_headers(&headers),
        json,
        url: uri.to_string(),
    })
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
