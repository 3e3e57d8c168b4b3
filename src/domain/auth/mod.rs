pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::User;
pub use errors::{AuthError, HashError, RepositoryError, SignInError};
pub use ports::{IdentityProvider, PasswordHasher, UserRepository};
pub use services::CredentialsIdentityProvider;
pub use value_objects::{Credentials, Email, Password, PasswordHash, SignInStrategy};
