use serde::Serialize;

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

/// Values the login form partial is rendered with
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginFormView {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  pub email: String,
  #[serde(rename = "redirectTo", skip_serializing_if = "Option::is_none")]
  pub redirect_to: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_response_shape() {
    let response = ErrorResponse {
      error: "internal_error".to_string(),
      message: "An internal server error occurred".to_string(),
    };

    assert_eq!(
      serde_json::to_value(&response).unwrap(),
      serde_json::json!({
        "error": "internal_error",
        "message": "An internal server error occurred"
      })
    );
  }

  #[test]
  fn test_login_form_view_field_names() {
    let view = LoginFormView {
      error: Some("Invalid credentials.".to_string()),
      email: "user@nextmail.com".to_string(),
      redirect_to: Some("/dashboard/invoices".to_string()),
    };

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["redirectTo"], "/dashboard/invoices");
    assert_eq!(value["error"], "Invalid credentials.");
  }
}
