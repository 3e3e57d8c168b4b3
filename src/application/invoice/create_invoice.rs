use chrono::Utc;
use std::sync::Arc;

use super::revalidate_and_redirect;
use crate::application::form_data::FormData;
use crate::application::outcome::{ActionOutcome, ActionState};
use crate::domain::invoice::{InvoiceRecord, InvoiceRepository, PageCache, validate_invoice};

pub const INVALID_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";
pub const DATABASE_ERROR_MESSAGE: &str = "Database Error: Failed to Create Invoice.";

pub struct CreateInvoiceUseCase {
  invoice_repo: Arc<dyn InvoiceRepository>,
  page_cache: Arc<dyn PageCache>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>, page_cache: Arc<dyn PageCache>) -> Self {
    Self {
      invoice_repo,
      page_cache,
    }
  }

  /// Validates the form and inserts a new invoice dated today (UTC).
  ///
  /// `_prev_state` is whatever the form last received; it does not influence
  /// the outcome.
  pub async fn execute(
    &self,
    _prev_state: &ActionState,
    form: &FormData,
  ) -> ActionOutcome<ActionState> {
    let input = match validate_invoice(&form.invoice_fields()) {
      Ok(input) => input,
      Err(e) => {
        tracing::debug!("Create invoice rejected: {:?}", e.kinds());
        return ActionOutcome::Failed(ActionState::invalid(
          e.field_errors(),
          INVALID_FIELDS_MESSAGE,
        ));
      }
    };

    let today = Utc::now().date_naive();
    let invoice = InvoiceRecord::new(input, today);
    let invoice_id = invoice.id;

    if let Err(e) = self.invoice_repo.create(invoice).await {
      tracing::error!("Failed to create invoice {}: {}", invoice_id, e);
      return ActionOutcome::Failed(ActionState::with_message(DATABASE_ERROR_MESSAGE));
    }

    tracing::info!("Created invoice {}", invoice_id);
    revalidate_and_redirect(self.page_cache.as_ref()).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::test_support::{Event, Harness};
  use crate::domain::invoice::InvoiceStatus;

  fn form(customer_id: &str, amount: &str, status: &str) -> FormData {
    [
      ("customerId", customer_id),
      ("amount", amount),
      ("status", status),
    ]
    .into_iter()
    .collect()
  }

  fn use_case(harness: &Harness) -> CreateInvoiceUseCase {
    CreateInvoiceUseCase::new(harness.repo(), harness.cache())
  }

  #[tokio::test]
  async fn test_creates_invoice_then_invalidates_and_redirects() {
    let harness = Harness::new();
    let outcome = use_case(&harness)
      .execute(&ActionState::default(), &form("cust-1", "49.99", "pending"))
      .await;

    assert_eq!(outcome.redirect_location(), Some("/dashboard/invoices"));

    let events = harness.events();
    assert_eq!(events.len(), 2);
    match &events[0] {
      Event::Created(record) => {
        assert_eq!(record.customer_id.value(), "cust-1");
        assert_eq!(record.amount.value(), 4999);
        assert_eq!(record.status, InvoiceStatus::Pending);
        assert_eq!(record.date, Utc::now().date_naive());
      }
      other => panic!("expected insert first, got {:?}", other),
    }
    assert_eq!(events[1], Event::Invalidated("/dashboard/invoices".to_string()));
  }

  #[tokio::test]
  async fn test_invalid_form_is_not_persisted() {
    let harness = Harness::new();
    let outcome = use_case(&harness)
      .execute(&ActionState::default(), &form("", "0", "overdue"))
      .await;

    let state = outcome.failed().expect("validation failure");
    assert_eq!(state.message.as_deref(), Some(INVALID_FIELDS_MESSAGE));
    let errors = state.errors.as_ref().unwrap();
    assert!(errors.contains("customerId"));
    assert!(errors.contains("amount"));
    assert!(errors.contains("status"));
    assert!(harness.events().is_empty());
  }

  #[tokio::test]
  async fn test_negative_amount_reports_amount_only() {
    let harness = Harness::new();
    let outcome = use_case(&harness)
      .execute(&ActionState::default(), &form("cust-1", "-20", "paid"))
      .await;

    let errors = outcome.failed().unwrap().errors.clone().unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["amount"]);
    assert!(harness.events().is_empty());
  }

  #[tokio::test]
  async fn test_database_failure_returns_message_without_invalidating() {
    let harness = Harness::failing();
    let outcome = use_case(&harness)
      .execute(&ActionState::default(), &form("cust-1", "10", "paid"))
      .await;

    assert_eq!(
      outcome,
      ActionOutcome::Failed(ActionState::with_message(DATABASE_ERROR_MESSAGE))
    );
    assert!(
      harness
        .events()
        .iter()
        .all(|e| !matches!(e, Event::Invalidated(_)))
    );
  }

  #[tokio::test]
  async fn test_previous_state_is_ignored() {
    let harness = Harness::new();
    let previous = ActionState::with_message(INVALID_FIELDS_MESSAGE);
    let outcome = use_case(&harness)
      .execute(&previous, &form("cust-1", "1", "paid"))
      .await;

    assert!(outcome.redirect_location().is_some());
  }
}
