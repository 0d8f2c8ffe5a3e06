//! API root endpoint.

use axum::http::{header, HeaderMap};
use serde_json::{json, Value};

use super::{success, ApiResult};

/// GET / - Link to each resource collection.
pub async fn api_root(headers: HeaderMap) -> ApiResult<Value> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    success(json!({ "members": format!("http://{}/members/", host) }))
}
