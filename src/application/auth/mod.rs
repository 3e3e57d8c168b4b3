//! Authentication use cases

mod authenticate;

pub use authenticate::{
  AuthenticateUseCase, INVALID_CREDENTIALS_MESSAGE, SOMETHING_WENT_WRONG_MESSAGE,
};
