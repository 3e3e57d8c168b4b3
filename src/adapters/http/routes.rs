use actix_web::web;
use std::sync::Arc;

use crate::application::auth::AuthenticateUseCase;
use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceUseCase,
};
use crate::domain::invoice::PageCache;

use super::handlers::{invoices_web, web_auth};
use super::templates::TemplateEngine;

/// Everything the web routes need, built once in `main`
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub page_cache: Arc<dyn PageCache>,
  pub authenticate_use_case: Arc<AuthenticateUseCase>,
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub update_invoice_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_invoice_use_case: Arc<DeleteInvoiceUseCase>,
  pub list_invoices_use_case: Arc<ListInvoicesUseCase>,
}

/// Configure web UI routes
///
/// # Routes
///
/// - GET /login - Login page
/// - POST /login - Authenticate with credentials
/// - GET /dashboard - Redirects to the invoice list
/// - GET /dashboard/invoices - Invoice list (page-cached)
/// - POST /dashboard/invoices/create - Create an invoice
/// - POST /dashboard/invoices/{id}/edit - Update an invoice
/// - POST /dashboard/invoices/{id}/delete - Delete an invoice
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.page_cache))
    .app_data(web::Data::new(deps.authenticate_use_case))
    .app_data(web::Data::new(deps.create_invoice_use_case))
    .app_data(web::Data::new(deps.update_invoice_use_case))
    .app_data(web::Data::new(deps.delete_invoice_use_case))
    .app_data(web::Data::new(deps.list_invoices_use_case))
    .route("/login", web::get().to(web_auth::login_page))
    .route("/login", web::post().to(web_auth::login_submit))
    .route("/dashboard", web::get().to(invoices_web::dashboard_home))
    .service(
      web::scope("/dashboard/invoices")
        .route("", web::get().to(invoices_web::invoices_page))
        .route(
          "/create",
          web::post().to(invoices_web::create_invoice_submit),
        )
        .route(
          "/{id}/edit",
          web::post().to(invoices_web::update_invoice_submit),
        )
        .route(
          "/{id}/delete",
          web::post().to(invoices_web::delete_invoice_submit),
        ),
    );
}
