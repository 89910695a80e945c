use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::services::errors::status_check_service_errors::StatusCheckServiceError;

#[derive(Debug)]
pub enum ApiError {
    StatusCheckService(StatusCheckServiceError),
}

impl From<StatusCheckServiceError> for ApiError {
    fn from(error: StatusCheckServiceError) -> Self {
        ApiError::StatusCheckService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::StatusCheckService(StatusCheckServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
