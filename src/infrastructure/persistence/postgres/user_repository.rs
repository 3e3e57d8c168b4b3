use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User, errors::RepositoryError, ports::UserRepository, value_objects::Email,
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  email: String,
  password: String,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User {
      id: row.id,
      name: row.name,
      email: row.email,
      password_hash: row.password,
    }
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
      SELECT id, name, email, password
      FROM users
      WHERE lower(email) = $1
      "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::from))
  }
}
