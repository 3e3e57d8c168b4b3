use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use super::see_other;
use crate::adapters::http::{dtos::LoginFormView, errors::ApiError, templates::TemplateEngine};
use crate::application::auth::AuthenticateUseCase;
use crate::application::{ActionOutcome, FormData};

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
  #[serde(rename = "redirectTo")]
  redirect_to: Option<String>,
}

fn render_login_form(
  templates: &TemplateEngine,
  template: &str,
  view: &LoginFormView,
) -> Result<String, ApiError> {
  let context = tera::Context::from_serialize(view)?;
  Ok(templates.render(template, &context)?)
}

// GET /login
pub async fn login_page(
  query: web::Query<LoginPageQuery>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  let view = LoginFormView {
    redirect_to: query.into_inner().redirect_to,
    ..LoginFormView::default()
  };
  let html = render_login_form(&templates, "pages/login.html.tera", &view)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Handle login form submission
///
/// A failure message re-renders the form partial; an unclassified failure
/// becomes a 500 through `ApiError`.
pub async fn login_submit(
  body: web::Bytes,
  use_case: web::Data<Arc<AuthenticateUseCase>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  let form = FormData::from_urlencoded(&body)?;

  match use_case.execute(None, &form).await? {
    ActionOutcome::Redirect(signal) => Ok(see_other(&signal)),
    ActionOutcome::Completed => Ok(HttpResponse::NoContent().finish()),
    ActionOutcome::Failed(message) => {
      let view = LoginFormView {
        error: Some(message),
        email: form.get("email").unwrap_or_default().to_string(),
        redirect_to: form.get("redirectTo").map(str::to_string),
      };
      let html = render_login_form(&templates, "partials/login_form.html.tera", &view)?;

      Ok(
        HttpResponse::BadRequest()
          .content_type("text/html")
          .body(html),
      )
    }
  }
}
