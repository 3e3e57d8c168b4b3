use std::sync::Arc;

use crate::application::form_data::FormData;
use crate::application::outcome::ActionOutcome;
use crate::domain::auth::{AuthError, IdentityProvider, SignInError, SignInStrategy};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";
pub const SOMETHING_WENT_WRONG_MESSAGE: &str = "Something went wrong.";

/// Use case behind the login form
pub struct AuthenticateUseCase {
  identity_provider: Arc<dyn IdentityProvider>,
}

impl AuthenticateUseCase {
  pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
    Self { identity_provider }
  }

  /// Signs the user in with the `credentials` strategy.
  ///
  /// # Returns
  /// * `Ok(Redirect)` - sign-in succeeded; follow the provider's navigation
  /// * `Ok(Failed(message))` - a classified authentication failure, ready to
  ///   show on the form
  ///
  /// # Errors
  /// Failures the identity provider did not classify are returned as-is.
  pub async fn execute(
    &self,
    _prev_state: Option<&str>,
    form: &FormData,
  ) -> Result<ActionOutcome<String>, anyhow::Error> {
    let credentials = form.credentials();

    match self
      .identity_provider
      .sign_in(SignInStrategy::Credentials, &credentials)
      .await
    {
      Ok(signal) => Ok(ActionOutcome::Redirect(signal)),
      Err(SignInError::Auth(e)) => {
        tracing::debug!("Sign-in refused: {}", e.error_type());
        let message = match e {
          AuthError::CredentialsSignin => INVALID_CREDENTIALS_MESSAGE,
          _ => SOMETHING_WENT_WRONG_MESSAGE,
        };
        Ok(ActionOutcome::Failed(message.to_string()))
      }
      Err(SignInError::Unclassified(e)) => Err(e),
    }
  }
}
