use thiserror::Error;

use super::value_objects::ValueObjectError;

/// Classified authentication failure.
///
/// The discriminator returned by [`AuthError::error_type`] is what callers
/// branch on; the display text is for logs only.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  CredentialsSignin,

  #[error("Sign-in callback failed: {0}")]
  CallbackRouteError(String),
}

impl AuthError {
  pub fn error_type(&self) -> &'static str {
    match self {
      AuthError::CredentialsSignin => "CredentialsSignin",
      AuthError::CallbackRouteError(_) => "CallbackRouteError",
    }
  }
}

/// Anything `IdentityProvider::sign_in` can fail with.
#[derive(Debug, Error)]
pub enum SignInError {
  #[error(transparent)]
  Auth(#[from] AuthError),

  /// Failure the auth layer did not classify; must reach the caller untouched.
  #[error(transparent)]
  Unclassified(#[from] anyhow::Error),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Invalid hash format: {0}")]
  InvalidFormat(#[from] ValueObjectError),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => RepositoryError::DatabaseError(db_err.message().to_string()),
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      sqlx::Error::Io(e) => RepositoryError::ConnectionFailed(e.to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
