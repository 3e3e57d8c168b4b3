use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::InvoiceError;

use super::dtos::ErrorResponse;

/// Failures a handler cannot turn into a form outcome
#[derive(Debug)]
pub enum ApiError {
  /// Request could not be read (400 Bad Request)
  BadRequest(String),

  /// Anything else (500 Internal Server Error); detail is logged, never sent
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error_type, message) = match self {
      ApiError::BadRequest(msg) => ("bad_request", msg.clone()),
      ApiError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: error_type.to_string(),
        message,
      })
  }
}

impl From<anyhow::Error> for ApiError {
  fn from(error: anyhow::Error) -> Self {
    ApiError::Internal(format!("{:#}", error))
  }
}

impl From<tera::Error> for ApiError {
  fn from(error: tera::Error) -> Self {
    ApiError::Internal(format!("Template error: {}", error))
  }
}

impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    ApiError::Internal(error.to_string())
  }
}

impl From<serde_urlencoded::de::Error> for ApiError {
  fn from(error: serde_urlencoded::de::Error) -> Self {
    ApiError::BadRequest(format!("Malformed form body: {}", error))
  }
}
