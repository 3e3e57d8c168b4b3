pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use dtos::{ErrorResponse, LoginFormView};
pub use errors::ApiError;
pub use routes::{WebRouteDependencies, configure_web_routes};
pub use templates::TemplateEngine;
