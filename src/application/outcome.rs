use serde::Serialize;

use crate::domain::invoice::FieldErrors;
use crate::domain::navigation::NavigationSignal;

/// State handed back to the form after a failed action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionState {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors: Option<FieldErrors>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl ActionState {
  pub fn with_message(message: impl Into<String>) -> Self {
    Self {
      errors: None,
      message: Some(message.into()),
    }
  }

  pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
    Self {
      errors: Some(errors),
      message: Some(message.into()),
    }
  }
}

/// How a form action finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<S> {
  /// Navigate away; nothing else is returned.
  Redirect(NavigationSignal),
  /// Side effects done, no value and no navigation.
  Completed,
  /// Returned to the form for display.
  Failed(S),
}

impl<S> ActionOutcome<S> {
  pub fn failed(&self) -> Option<&S> {
    match self {
      ActionOutcome::Failed(state) => Some(state),
      _ => None,
    }
  }

  pub fn redirect_location(&self) -> Option<&str> {
    match self {
      ActionOutcome::Redirect(signal) => Some(signal.location()),
      _ => None,
    }
  }
}
