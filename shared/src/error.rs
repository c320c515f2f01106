use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidRange(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("Not enough rooms, available rooms count: {available}")]
    CapacityExceeded { available: i64 },
    #[error("Reservation duration has started")]
    ReservationAlreadyStarted,
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    BadRequest(String),
    #[error("identity could not be resolved from the request")]
    UnauthenticatedRequest,
    #[error("store operation failed: {0}")]
    StoreOperationError(String),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRange(_)
            | AppError::CapacityExceeded { .. }
            | AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::ReservationAlreadyStarted => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::UnauthenticatedRequest => StatusCode::UNAUTHORIZED,
            AppError::StoreOperationError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }

        let body = match &self {
            AppError::CapacityExceeded { available } => json!({
                "message": self.to_string(),
                "availableRoomsCount": available,
            }),
            _ => json!({ "message": self.to_string() }),
        };

        (status_code, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        for (err, expected) in [
            (AppError::InvalidRange("x".into()), StatusCode::BAD_REQUEST),
            (AppError::CapacityExceeded { available: 3 }, StatusCode::BAD_REQUEST),
            (AppError::ReservationAlreadyStarted, StatusCode::BAD_REQUEST),
            (AppError::EntityNotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::ForbiddenOperation("x".into()), StatusCode::FORBIDDEN),
            (AppError::UnauthenticatedRequest, StatusCode::UNAUTHORIZED),
            (
                AppError::StoreOperationError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ] {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn capacity_message_reports_available_count() {
        let err = AppError::CapacityExceeded { available: 3 };
        assert_eq!(
            err.to_string(),
            "Not enough rooms, available rooms count: 3"
        );
    }
}
