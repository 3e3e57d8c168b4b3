pub mod invoices_web;
pub mod web_auth;

use actix_web::{HttpResponse, http::header};

use crate::domain::navigation::NavigationSignal;

/// Form-action redirect: `303 See Other` so the browser follows with a GET
pub fn see_other(signal: &NavigationSignal) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, signal.location()))
    .finish()
}
