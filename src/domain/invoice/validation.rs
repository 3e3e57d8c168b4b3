//! Field validation for submitted invoice forms.
//!
//! Every field is checked independently and all failures are collected,
//! so a form with three bad fields reports three entries.

use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::entities::InvoiceInput;
use super::value_objects::{Amount, CustomerId, InvoiceStatus};

pub const CUSTOMER_ID_FIELD: &str = "customerId";
pub const AMOUNT_FIELD: &str = "amount";
pub const STATUS_FIELD: &str = "status";

/// Raw, untyped invoice fields as they arrive from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInvoiceFields {
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
  MissingCustomer,
  InvalidAmount,
  InvalidStatus,
}

impl FieldErrorKind {
  pub fn field(&self) -> &'static str {
    match self {
      FieldErrorKind::MissingCustomer => CUSTOMER_ID_FIELD,
      FieldErrorKind::InvalidAmount => AMOUNT_FIELD,
      FieldErrorKind::InvalidStatus => STATUS_FIELD,
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      FieldErrorKind::MissingCustomer => "Please select a customer.",
      FieldErrorKind::InvalidAmount => "Please enter an amount greater than $0.",
      FieldErrorKind::InvalidStatus => "Please select an invoice status.",
    }
  }
}

/// Field name to the ordered messages reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.0.entry(field.into()).or_default().push(message.into());
  }

  pub fn get(&self, field: &str) -> Option<&[String]> {
    self.0.get(field).map(Vec::as_slice)
  }

  pub fn contains(&self, field: &str) -> bool {
    self.0.contains_key(field)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }
}

impl From<&[FieldErrorKind]> for FieldErrors {
  fn from(kinds: &[FieldErrorKind]) -> Self {
    let mut errors = FieldErrors::new();
    for kind in kinds {
      errors.add(kind.field(), kind.message());
    }
    errors
  }
}

/// Validation failed on one or more fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceValidationError {
  kinds: Vec<FieldErrorKind>,
}

impl InvoiceValidationError {
  pub fn kinds(&self) -> &[FieldErrorKind] {
    &self.kinds
  }

  pub fn has(&self, kind: FieldErrorKind) -> bool {
    self.kinds.contains(&kind)
  }

  pub fn field_errors(&self) -> FieldErrors {
    FieldErrors::from(self.kinds.as_slice())
  }
}

pub type ValidationResult = Result<InvoiceInput, InvoiceValidationError>;

fn validate_customer_id(raw: Option<&str>) -> Result<CustomerId, FieldErrorKind> {
  raw
    .ok_or(FieldErrorKind::MissingCustomer)
    .and_then(|v| CustomerId::new(v).map_err(|_| FieldErrorKind::MissingCustomer))
}

fn validate_amount(raw: Option<&str>) -> Result<Amount, FieldErrorKind> {
  raw
    .ok_or(FieldErrorKind::InvalidAmount)
    .and_then(|v| Amount::from_str(v).map_err(|_| FieldErrorKind::InvalidAmount))
}

fn validate_status(raw: Option<&str>) -> Result<InvoiceStatus, FieldErrorKind> {
  raw
    .ok_or(FieldErrorKind::InvalidStatus)
    .and_then(|v| InvoiceStatus::from_str(v).map_err(|_| FieldErrorKind::InvalidStatus))
}

/// Validates all invoice fields in one pass.
pub fn validate_invoice(raw: &RawInvoiceFields) -> ValidationResult {
  let customer_id = validate_customer_id(raw.customer_id.as_deref());
  let amount = validate_amount(raw.amount.as_deref());
  let status = validate_status(raw.status.as_deref());

  match (customer_id, amount, status) {
    (Ok(customer_id), Ok(amount), Ok(status)) => Ok(InvoiceInput {
      customer_id,
      amount,
      status,
    }),
    (customer_id, amount, status) => {
      let kinds = [customer_id.err(), amount.err(), status.err()]
        .into_iter()
        .flatten()
        .collect();
      Err(InvoiceValidationError { kinds })
    }
  }
}
