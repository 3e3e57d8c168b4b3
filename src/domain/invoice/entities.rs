use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{Amount, AmountInCents, CustomerId, InvoiceStatus};

/// Typed form fields after validation. Never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceInput {
  pub customer_id: CustomerId,
  pub amount: Amount,
  pub status: InvoiceStatus,
}

/// A persisted invoice row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
  pub id: Uuid,
  pub customer_id: CustomerId,
  pub amount: AmountInCents,
  pub status: InvoiceStatus,
  /// Creation date. Set once by [`InvoiceRecord::new`], never touched by updates.
  pub date: NaiveDate,
}

impl InvoiceRecord {
  pub fn new(input: InvoiceInput, date: NaiveDate) -> Self {
    Self {
      id: Uuid::new_v4(),
      customer_id: input.customer_id,
      amount: input.amount.in_cents(),
      status: input.status,
      date,
    }
  }
}

/// Columns an update is allowed to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
  pub customer_id: CustomerId,
  pub amount: AmountInCents,
  pub status: InvoiceStatus,
}

impl From<InvoiceInput> for InvoiceChanges {
  fn from(input: InvoiceInput) -> Self {
    Self {
      customer_id: input.customer_id,
      amount: input.amount.in_cents(),
      status: input.status,
    }
  }
}

/// Row of the invoice list view.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
  pub id: Uuid,
  pub customer_id: String,
  pub customer_name: Option<String>,
  pub amount: String,
  pub status: String,
  pub date: NaiveDate,
}
