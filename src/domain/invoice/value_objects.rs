use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid customer id: {0}")]
  InvalidCustomerId(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid invoice status: {0}")]
  InvalidStatus(String),
}

// Customer Id - opaque identifier chosen from the customer picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidCustomerId(
        "Customer id cannot be empty".to_string(),
      ));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Pending,
  Paid,
}

impl InvoiceStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Pending => "pending",
      InvoiceStatus::Paid => "paid",
    }
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  // Form values are matched exactly; "Paid" is not a valid status.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(InvoiceStatus::Pending),
      "paid" => Ok(InvoiceStatus::Paid),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

// Amount - strictly positive major-unit value entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }
    if Self::cents_of(value).is_none() {
      return Err(ValueObjectError::InvalidAmount(
        "Amount is too large".to_string(),
      ));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> Decimal {
    self.0
  }

  /// Minor-unit representation stored in the `amount` column.
  pub fn in_cents(&self) -> AmountInCents {
    // Checked in `new`
    AmountInCents(Self::cents_of(self.0).unwrap_or_default())
  }

  fn cents_of(value: Decimal) -> Option<i64> {
    value
      .checked_mul(Decimal::ONE_HUNDRED)?
      .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
      .to_i64()
  }
}

impl FromStr for Amount {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = Decimal::from_str(s.trim())
      .map_err(|_| ValueObjectError::InvalidAmount(format!("Not a number: {}", s)))?;
    Amount::new(value)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AmountInCents(i64);

impl AmountInCents {
  pub fn from_db(value: i64) -> Self {
    Self(value)
  }

  pub fn value(&self) -> i64 {
    self.0
  }

  /// Back to major units, e.g. 4999 -> 49.99
  pub fn to_major(&self) -> Decimal {
    Decimal::new(self.0, 2)
  }
}

impl fmt::Display for AmountInCents {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "${:.2}", self.to_major())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_customer_id() {
    assert!(CustomerId::new("3958dc9e-712f-4377-85e9-fec4b6a6442a").is_ok());
    assert!(CustomerId::new("").is_err());
    assert!(CustomerId::new("   ").is_err());
    assert_eq!(CustomerId::new("  c1 ").unwrap().value(), "c1");
  }

  #[test]
  fn test_invoice_status() {
    assert_eq!(
      InvoiceStatus::from_str("pending").unwrap(),
      InvoiceStatus::Pending
    );
    assert_eq!(InvoiceStatus::from_str("paid").unwrap(), InvoiceStatus::Paid);
    assert!(InvoiceStatus::from_str("Paid").is_err());
    assert!(InvoiceStatus::from_str("draft").is_err());
    assert!(InvoiceStatus::from_str("").is_err());
    assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
  }

  #[test]
  fn test_amount_must_be_positive() {
    assert!(Amount::new(dec!(0.01)).is_ok());
    assert!(Amount::new(dec!(0)).is_err());
    assert!(Amount::new(dec!(-5)).is_err());
  }

  #[test]
  fn test_amount_parsing() {
    assert_eq!(Amount::from_str("49.99").unwrap().value(), dec!(49.99));
    assert_eq!(Amount::from_str(" 12 ").unwrap().value(), dec!(12));
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("-1").is_err());
  }

  #[test]
  fn test_amount_in_cents() {
    assert_eq!(Amount::new(dec!(49.99)).unwrap().in_cents().value(), 4999);
    assert_eq!(Amount::new(dec!(100)).unwrap().in_cents().value(), 10000);
    assert_eq!(Amount::new(dec!(0.125)).unwrap().in_cents().value(), 13);
    assert_eq!(Amount::new(dec!(10.004)).unwrap().in_cents().value(), 1000);
  }

  #[test]
  fn test_amount_too_large() {
    assert!(Amount::new(Decimal::MAX).is_err());
  }

  #[test]
  fn test_amount_in_cents_display() {
    assert_eq!(AmountInCents::from_db(4999).to_string(), "$49.99");
    assert_eq!(AmountInCents::from_db(4999).to_major(), dec!(49.99));
  }
}
