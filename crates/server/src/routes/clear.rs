use crate::dtos::course::{ClearStateResponse, ErrorResponse, MessageResponse};
use crate::routes::{ApiError, api_error};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracker::ClearCountdown;

fn clear_state_response(countdown: ClearCountdown) -> ClearStateResponse {
    ClearStateResponse {
        armed: countdown.is_armed(),
        remaining: countdown.remaining().unwrap_or(0),
    }
}

/// Arm the clear-all countdown; re-arming restarts it from the full duration
#[utoipa::path(
    post,
    path = "/courses/clear-all",
    responses(
        (status = 200, description = "Countdown armed", body = ClearStateResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clear all"
)]
pub async fn begin_clear_all(
    State(state): State<AppState>,
) -> Result<Json<ClearStateResponse>, ApiError> {
    let countdown = {
        let mut tracker = state
            .tracker
            .lock()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to arm clear-all"))?;
        tracker.begin_clear_all();
        tracker.clear_countdown()
    };

    state
        .clear_timer
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to arm clear-all"))?
        .arm(Arc::clone(&state.tracker));

    Ok(Json(clear_state_response(countdown)))
}

/// Empty the course list, permitted only once the armed countdown has elapsed
#[utoipa::path(
    post,
    path = "/courses/clear-all/confirm",
    responses(
        (status = 200, description = "All courses deleted", body = MessageResponse),
        (status = 409, description = "Countdown not armed or still running", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clear all"
)]
pub async fn confirm_clear_all(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cleared = {
        let mut tracker = state.tracker.lock().map_err(|_| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear courses")
        })?;
        tracker.confirm_clear_all()
    };

    if !cleared {
        return Err(api_error(
            StatusCode::CONFLICT,
            "Clear-all countdown has not elapsed",
        ));
    }

    state
        .clear_timer
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear courses"))?
        .cancel();

    Ok(Json(MessageResponse {
        message: "All courses deleted".to_string(),
    }))
}

/// Disarm the clear-all countdown, leaving the list untouched; idempotent
#[utoipa::path(
    post,
    path = "/courses/clear-all/cancel",
    responses(
        (status = 200, description = "Countdown disarmed", body = ClearStateResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Clear all"
)]
pub async fn cancel_clear_all(
    State(state): State<AppState>,
) -> Result<Json<ClearStateResponse>, ApiError> {
    let countdown = {
        let mut tracker = state.tracker.lock().map_err(|_| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to cancel clear-all")
        })?;
        tracker.cancel_clear_all();
        tracker.clear_countdown()
    };

    state
        .clear_timer
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to cancel clear-all"))?
        .cancel();

    Ok(Json(clear_state_response(countdown)))
}
