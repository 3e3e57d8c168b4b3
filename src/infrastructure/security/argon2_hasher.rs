use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{PasswordHash as Argon2PasswordHash, PasswordVerifier},
};
use async_trait::async_trait;

use crate::domain::auth::errors::HashError;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Argon2id password verifier
///
/// Parameters: 19 MiB memory, 2 iterations, 1 lane, 32-byte output.
/// Hashes produced elsewhere with other parameters still verify, since the
/// PHC string carries its own parameters.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub fn new() -> Result<Self, HashError> {
    let params = Params::new(19456, 2, 1, Some(32))
      .map_err(|e| HashError::HashingFailed(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  /// `Ok(false)` on mismatch; `Err` only when the stored hash cannot be used.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, HashError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
      .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

    // verify_password compares in constant time
    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(HashError::VerificationFailed(e.to_string())),
    }
  }
}
