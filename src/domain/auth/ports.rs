use async_trait::async_trait;

use super::entities::User;
use super::errors::{HashError, RepositoryError, SignInError};
use super::value_objects::{Credentials, Email, Password, PasswordHash, SignInStrategy};
use crate::domain::navigation::NavigationSignal;

/// Repository trait for user lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
}

/// Verifies passwords against stored hashes
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, HashError>;
}

/// Verifies credentials for a sign-in strategy.
///
/// On success the provider decides where the user goes next.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
  async fn sign_in(
    &self,
    strategy: SignInStrategy,
    credentials: &Credentials,
  ) -> Result<NavigationSignal, SignInError>;
}
