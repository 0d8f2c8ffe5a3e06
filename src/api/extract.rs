//! Request extractors that reject with `AppError` bodies instead of axum's plain text.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Member id taken from the `{id}` path segment.
///
/// Anything that is not an integer cannot name a member, so it is reported
/// as not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct MemberId(pub i64);

impl<S> FromRequestParts<S> for MemberId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        raw.parse()
            .map(MemberId)
            .map_err(|_| AppError::NotFound(format!("Member {} not found", raw)))
    }
}

/// Raw JSON request body, left unvalidated for the serializer.
///
/// An empty body reads as `{}` so missing fields are reported per field.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }

        if !is_json_content_type(&content_type) {
            return Err(AppError::UnsupportedMediaType(format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )));
        }

        Ok(JsonBody(serde_json::from_slice(&bytes)?))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
        assert!(!is_json_content_type(""));
    }
}
