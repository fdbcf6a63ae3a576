use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error envelope: `{"error": title, "code": code, "details": details}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub code: Option<u16>,
    pub details: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, details: Option<String>) -> Self {
        Self { status, title: title.into(), code: None, details }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "code": self.code,
            "details": self.details,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::AlreadyRegistered(_) => (StatusCode::CONFLICT, "Already Registered"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::StockExceeded { .. } => (StatusCode::BAD_REQUEST, "Stock Exceeded"),
            ServiceError::Db(_) => {
                error!(err = %e, code = e.code(), "repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        JsonApiError::new(status, title, Some(e.to_string())).with_code(e.code())
    }
}

// Extractor rejections are input errors; all of them answer 400.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Input", Some(r.body_text()))
            .with_code(ServiceError::VALIDATION_CODE)
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Input", Some(r.body_text()))
            .with_code(ServiceError::VALIDATION_CODE)
    }
}
