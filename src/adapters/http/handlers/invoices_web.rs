use actix_web::{HttpResponse, web};
use std::sync::Arc;

use super::see_other;
use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceUseCase,
};
use crate::application::{ActionOutcome, ActionState, FormData};
use crate::domain::invoice::{INVOICES_PATH, PageCache};
use crate::domain::navigation::NavigationSignal;

fn action_response(outcome: ActionOutcome<ActionState>) -> HttpResponse {
  match outcome {
    ActionOutcome::Redirect(signal) => see_other(&signal),
    ActionOutcome::Completed => HttpResponse::NoContent().finish(),
    ActionOutcome::Failed(state) => HttpResponse::UnprocessableEntity().json(state),
  }
}

// GET /dashboard
pub async fn dashboard_home() -> HttpResponse {
  see_other(&NavigationSignal::redirect(INVOICES_PATH))
}

// GET /dashboard/invoices
pub async fn invoices_page(
  templates: web::Data<TemplateEngine>,
  page_cache: web::Data<Arc<dyn PageCache>>,
  list_invoices_use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  if let Some(html) = page_cache.get(INVOICES_PATH).await {
    tracing::debug!("Serving {} from page cache", INVOICES_PATH);
    return Ok(HttpResponse::Ok().content_type("text/html").body(html));
  }

  // Read before loading so a mutation that lands mid-render voids this write
  let generation = page_cache.generation(INVOICES_PATH).await;
  let invoices = list_invoices_use_case.execute().await?;

  let mut context = tera::Context::new();
  context.insert("invoices", &invoices);

  let html = templates.render("pages/invoices.html.tera", &context)?;
  page_cache.put(INVOICES_PATH, &html, generation).await;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /dashboard/invoices/create
pub async fn create_invoice_submit(
  body: web::Bytes,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = FormData::from_urlencoded(&body)?;
  let outcome = use_case.execute(&ActionState::default(), &form).await;

  Ok(action_response(outcome))
}

// POST /dashboard/invoices/{id}/edit
pub async fn update_invoice_submit(
  path: web::Path<String>,
  body: web::Bytes,
  use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = FormData::from_urlencoded(&body)?;
  let outcome = use_case
    .execute(&path.into_inner(), &ActionState::default(), &form)
    .await;

  Ok(action_response(outcome))
}

// POST /dashboard/invoices/{id}/delete
pub async fn delete_invoice_submit(
  path: web::Path<String>,
  use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> HttpResponse {
  action_response(use_case.execute(&path.into_inner()).await)
}
