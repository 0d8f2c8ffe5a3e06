//! REST API module.
//!
//! Contains the API root and member handlers, extractors and response types.

mod extract;
mod members;
mod root;

pub use extract::*;
pub use members::*;
pub use root::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Success response: a status code and an optional JSON body.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: StatusCode,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.data {
            Some(data) => (self.status, Json(data)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// 200 with a body.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(StatusCode::OK, data))
}

/// 201 with the created resource.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(StatusCode::CREATED, data))
}

/// 204 with an empty body.
pub fn no_content() -> ApiResult<()> {
    Ok(ApiResponse {
        status: StatusCode::NO_CONTENT,
        data: None,
    })
}
