//! HTTP route handlers.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::bookings::BookingError;
use crate::domain::{BookingId, DomainError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/:id", get(get_booking).delete(delete_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Response {
    match state.bookings.health().await {
        Ok(()) => Json(HealthResponse {
            status: "OK".to_string(),
        })
        .into_response(),
        Err(e) => {
            warn!(error = %e, "health check failed");
            AppError::ServiceUnavailable {
                message: "service unavailable".to_string(),
            }
            .into_response()
        }
    }
}

/// Create a booking.
///
/// The body is taken as raw bytes so that malformed JSON gets the same error
/// shape as every other rejection.
async fn create_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let request: CreateBookingRequest =
        serde_json::from_slice(&body).map_err(|_| AppError::BadRequest {
            message: "bad request".to_string(),
        })?;
    let new = request.validate()?;

    let booking = state.bookings.create_booking(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking: BookingView::from_booking(&booking),
        }),
    ))
}

/// List bookings, optionally filtered.
async fn list_bookings(
    State(state): State<AppState>,
    query: Result<Query<ListBookingsQuery>, QueryRejection>,
) -> Result<Json<ListBookingsResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: format!("invalid query: {}", e.body_text()),
    })?;
    let (filters, pagination) = query
        .parse()
        .map_err(|message| AppError::BadRequest { message })?;

    let bookings = state
        .bookings
        .list_bookings(&filters, pagination)
        .await?
        .iter()
        .map(BookingView::from_booking)
        .collect();

    Ok(Json(ListBookingsResponse { bookings }))
}

/// Fetch one booking.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let id = BookingId::parse(&id)?;
    let booking = state.bookings.get_booking(id).await?;
    Ok(Json(BookingResponse {
        booking: BookingView::from_booking(&booking),
    }))
}

/// Cancel a booking.
async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = BookingId::parse(&id)?;
    state.bookings.delete_booking(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    ServiceUnavailable { message: String },
    /// Logged in full, reported to the client without detail
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        if e.is_launch_pad_not_found() {
            return AppError::NotFound {
                message: "launch pad with ID not found".to_string(),
            };
        }
        match e {
            BookingError::DateUnavailable => AppError::Conflict {
                message: "date is unavailable".to_string(),
            },
            BookingError::NotFound(_) => AppError::NotFound {
                message: "booking not found".to_string(),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::ServiceUnavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => {
                error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AvailabilityError;
    use crate::spacex::LaunchDataError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn booking_errors_map_to_statuses() {
        assert_eq!(
            status_of(BookingError::DateUnavailable.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(BookingError::NotFound(BookingId::new_v4()).into()),
            StatusCode::NOT_FOUND
        );

        let missing_pad = BookingError::Availability(AvailabilityError::LaunchPad {
            id: "nope".into(),
            source: LaunchDataError::LaunchPadNotFound { id: "nope".into() },
        });
        assert!(matches!(
            AppError::from(missing_pad),
            AppError::NotFound { message } if message == "launch pad with ID not found"
        ));

        let upstream = BookingError::Availability(AvailabilityError::LaunchPad {
            id: "pad".into(),
            source: LaunchDataError::RateLimited,
        });
        assert_eq!(
            status_of(upstream.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        let err = AppError::from(DomainError::MissingField("gender"));
        assert!(matches!(
            &err,
            AppError::BadRequest { message } if message == "gender is required"
        ));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }
}
