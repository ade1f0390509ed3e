use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_code(&err);
        Self::new(status, err.to_string())
    }

    /// Response for a path id that is not an integer.
    pub fn invalid_id(raw: &str) -> Self {
        tracing::debug!(id = raw, "path id is not an integer");
        Self::from_error(ApplicationError::not_found())
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps an error to the status it is answered with. Every error passing
/// through here is logged.
pub fn status_code(err: &ApplicationError) -> StatusCode {
    tracing::error!(error = %err, "request failed");

    match err {
        ApplicationError::Domain(DomainError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DomainError::Conflict) => StatusCode::CONFLICT,
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Domain(
            DomainError::InternalServerError | DomainError::BadParamInput | DomainError::Other(_),
        ) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T, E> IntoHttpResult<T> for Result<T, E>
where
    E: Into<ApplicationError>,
{
    fn into_http(self) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(err.into()))
    }
}
