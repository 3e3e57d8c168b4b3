use argon2::PasswordHash as Argon2PasswordHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidateEmail};
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ValueObjectError {
  #[error("Invalid email format: {0}")]
  InvalidEmail(String),

  #[error("Password is too short (minimum {min} characters)")]
  PasswordTooShort { min: usize },

  #[error("Invalid password hash format")]
  InvalidPasswordHash,
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValueObjectError> {
    let email = email.into();

    if !email.validate_email() {
      return Err(ValueObjectError::InvalidEmail(email));
    }

    // Normalize to lowercase
    Ok(Self(email.to_lowercase()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  pub const MIN_LENGTH: usize = 6;

  pub fn new(password: impl Into<String>) -> Result<Self, ValueObjectError> {
    let password = password.into();

    if password.chars().count() < Self::MIN_LENGTH {
      return Err(ValueObjectError::PasswordTooShort {
        min: Self::MIN_LENGTH,
      });
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// ============================================================================
// PasswordHash Value Object (Argon2id PHC string)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Wraps a stored hash after checking it parses as a PHC string
  pub fn from_hash(hash: impl Into<String>) -> Result<Self, ValueObjectError> {
    let hash = hash.into();

    Argon2PasswordHash::new(&hash).map_err(|_| ValueObjectError::InvalidPasswordHash)?;

    Ok(Self(hash))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Sign-in strategy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStrategy {
  Credentials,
}

impl SignInStrategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      SignInStrategy::Credentials => "credentials",
    }
  }
}

impl fmt::Display for SignInStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// Submitted credentials
// ============================================================================

/// Credentials as submitted on the login form, before any lookup.
#[derive(Clone, Default, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
  #[validate(required, email(message = "Invalid email format"))]
  pub email: Option<String>,

  #[validate(
    required,
    length(min = 6, message = "Password must be at least 6 characters")
  )]
  pub password: Option<String>,

  /// Where to send the user after a successful sign-in
  #[serde(rename = "redirectTo")]
  pub redirect_to: Option<String>,
}

impl Credentials {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: Some(email.into()),
      password: Some(password.into()),
      redirect_to: None,
    }
  }

  pub fn with_redirect_to(mut self, redirect_to: impl Into<String>) -> Self {
    self.redirect_to = Some(redirect_to.into());
    self
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .field("password", &"***")
      .field("redirect_to", &self.redirect_to)
      .finish()
  }
}
