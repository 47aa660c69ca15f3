// catalog_server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::envelope::MSG_NOT_FOUND;
use catalog::{CatalogError, Envelope};
use thiserror::Error;

pub const MSG_AUTH_REQUIRED: &str = "Authentication required. Please provide a valid Bearer token.";
pub const MSG_INVALID_TOKEN: &str = "Invalid or expired token";
pub const MSG_VALIDATION: &str = "Validation failed";
pub const MSG_INTERNAL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Authentication Required: {0}")]
  Unauthorized(String),

  #[error("Authentication Failed: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Lets top-level code use `?` on anyhow results; a wrapped AppError is recovered as-is.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(err) => match err.downcast::<CatalogError>() {
        Ok(source) => AppError::Catalog { source },
        Err(other) => AppError::Internal(other.to_string()),
      },
    }
  }
}

impl AppError {
  pub fn product_not_found() -> Self {
    AppError::NotFound(MSG_NOT_FOUND.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      AppError::Forbidden(_) => StatusCode::FORBIDDEN,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Catalog { source } if source.is_not_found() => StatusCode::NOT_FOUND,
      AppError::Catalog { .. } | AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let envelope = match self {
      AppError::Validation(errors) => Envelope::failure(MSG_VALIDATION).with_errors(errors.clone()),
      AppError::Unauthorized(m) | AppError::Forbidden(m) | AppError::NotFound(m) => Envelope::failure(m.clone()),
      AppError::Catalog { source } if source.is_not_found() => Envelope::failure(MSG_NOT_FOUND),
      // Faults are logged in full but reported generically.
      AppError::Catalog { .. } | AppError::Config(_) | AppError::Internal(_) => {
        tracing::error!(application_error = %self, "Responding with internal error");
        Envelope::failure(MSG_INTERNAL)
      }
    };
    if status.is_client_error() {
      tracing::debug!(application_error = %self, %status, "Responding with client error");
    }
    HttpResponse::build(status).json(envelope)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
