pub mod clear;
pub mod course;
pub mod health;

use crate::dtos::course::ErrorResponse;
use axum::{Json, http::StatusCode};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
