use serde::Serialize;
use uuid::Uuid;

/// A dashboard user able to sign in with credentials
#[derive(Debug, Clone, Serialize)]
pub struct User {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  /// Argon2 PHC string
  #[serde(skip_serializing)]
  pub password_hash: String,
}
