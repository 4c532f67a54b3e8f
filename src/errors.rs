use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use log::error;
use serde_json::json;

/// Entity kinds that can be looked up by identifier.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    #[display(fmt = "Event")]
    Event,

    #[display(fmt = "Member")]
    Member,

    #[display(fmt = "Presence")]
    Presence,

    #[display(fmt = "Admin")]
    Admin,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "unknown role: {}", _0)]
    UnknownRole(String),

    #[display(fmt = "duplicate role: {}", _0)]
    DuplicateRole(String),

    #[display(fmt = "unknown answer: {}", _0)]
    UnknownAnswer(String),

    #[display(fmt = "name must not be empty")]
    EmptyName,

    #[display(fmt = "endDate must not be before startDate")]
    EndBeforeStart,

    #[display(fmt = "malformed request: {}", _0)]
    MalformedBody(String),
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Display)]
pub enum AppError {
    #[display(fmt = "{} not found", _0)]
    NotFound(Entity),

    #[display(fmt = "{}", _0)]
    Validation(ValidationError),

    #[display(fmt = "Unauthorized")]
    Unauthorized,

    /// Detail is kept for the log, never sent to the client.
    #[display(fmt = "Internal error")]
    Storage(String),
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        error!("storage failure: {:?}", err);
        AppError::Storage(err.to_string())
    }
}

impl error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(json!({ "error": self.to_string() }).to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
