// src/errors.rs
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    /// Błąd źródła danych (zliczanie lub pobieranie rekordów).
    #[error("Błąd źródła danych: {0}")]
    DataSource(#[from] sqlx::Error),

    #[error("Nie znaleziono zasobu")]
    NotFound,

    #[error("Błędy walidacji")]
    ValidationError(#[from] ValidationErrors),

    #[error("Nieprawidłowe dane wejściowe: {0}")]
    UnprocessableEntity(String),

    #[error("Niepoprawne żądanie: {0}")]
    BadRequest(String),

    #[error("Nieobsługiwany typ treści: {0}")]
    UnsupportedMediaType(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            AppError::DataSource(sqlx_error) => {
                tracing::error!("Błąd źródła danych: {:?}", sqlx_error);
                "Wystąpił wewnętrzny błąd serwera (baza danych)".to_string()
            }
            AppError::NotFound => "Nie znaleziono zasobu".to_string(),
            AppError::ValidationError(errors) => {
                let mut messages = Vec::new();
                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        let msg = error.message.as_ref().map_or_else(
                            || format!("Pole '{}' jest nieprawidłowe", field),
                            |m| format!("Pole '{}': {}", field, m),
                        );
                        messages.push(msg);
                    }
                }
                messages.join("; ")
            }
            AppError::UnprocessableEntity(message) => message,
            AppError::BadRequest(message) => message,
            AppError::UnsupportedMediaType(content_type) => {
                format!("Nieobsługiwany typ treści: {}", content_type)
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        tracing::error!("Błąd przetwarzania Multipart: {:?}", err);
        AppError::BadRequest(format!("Błąd przetwarzania danych formularza: {}", err))
    }
}
