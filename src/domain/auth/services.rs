use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use super::errors::{AuthError, RepositoryError, SignInError};
use super::ports::{IdentityProvider, PasswordHasher, UserRepository};
use super::value_objects::{Credentials, Email, Password, PasswordHash, SignInStrategy};
use crate::domain::navigation::{NavigationSignal, is_local_path};

/// Identity provider for the `credentials` strategy: email lookup plus
/// password hash verification.
pub struct CredentialsIdentityProvider {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  default_redirect: String,
}

impl CredentialsIdentityProvider {
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    default_redirect: impl Into<String>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      default_redirect: default_redirect.into(),
    }
  }

  /// Validated email and password, or `CredentialsSignin` if the form does
  /// not match the schema.
  fn parse(credentials: &Credentials) -> Result<(Email, Password), AuthError> {
    if let Err(errors) = credentials.validate() {
      tracing::debug!("Credentials rejected by schema: {}", errors);
      return Err(AuthError::CredentialsSignin);
    }

    let email = credentials
      .email
      .as_deref()
      .map(Email::new)
      .transpose()
      .ok()
      .flatten()
      .ok_or(AuthError::CredentialsSignin)?;
    let password = credentials
      .password
      .as_deref()
      .map(Password::new)
      .transpose()
      .ok()
      .flatten()
      .ok_or(AuthError::CredentialsSignin)?;

    Ok((email, password))
  }

  fn redirect_target(&self, credentials: &Credentials) -> NavigationSignal {
    match credentials.redirect_to.as_deref() {
      Some(path) if is_local_path(path) => NavigationSignal::redirect(path),
      _ => NavigationSignal::redirect(self.default_redirect.clone()),
    }
  }
}

#[async_trait]
impl IdentityProvider for CredentialsIdentityProvider {
  async fn sign_in(
    &self,
    strategy: SignInStrategy,
    credentials: &Credentials,
  ) -> Result<NavigationSignal, SignInError> {
    tracing::debug!("Signing in with {} strategy", strategy);

    let (email, password) = Self::parse(credentials)?;

    let user = match self.user_repo.find_by_email(&email).await {
      Ok(Some(user)) => user,
      Ok(None) => {
        tracing::info!("Sign-in failed: no user for {}", email);
        return Err(AuthError::CredentialsSignin.into());
      }
      Err(e @ RepositoryError::ConnectionFailed(_)) => {
        tracing::error!("User store unavailable during sign-in: {}", e);
        return Err(AuthError::CallbackRouteError(e.to_string()).into());
      }
      Err(e) => {
        tracing::error!("Failed to fetch user: {}", e);
        return Err(AuthError::CallbackRouteError(e.to_string()).into());
      }
    };

    let password_hash = PasswordHash::from_hash(user.password_hash.as_str())
      .map_err(|e| AuthError::CallbackRouteError(format!("stored hash for {}: {}", user.id, e)))?;

    let matches = self
      .password_hasher
      .verify(&password, &password_hash)
      .await
      .map_err(|e| AuthError::CallbackRouteError(e.to_string()))?;

    if !matches {
      tracing::info!("Sign-in failed: wrong password for user_id={}", user.id);
      return Err(AuthError::CredentialsSignin.into());
    }

    tracing::info!("Sign-in successful for user_id={}", user.id);
    Ok(self.redirect_target(credentials))
  }
}
