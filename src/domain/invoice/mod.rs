pub mod entities;
pub mod errors;
pub mod ports;
pub mod validation;
pub mod value_objects;

pub use entities::{InvoiceChanges, InvoiceInput, InvoiceRecord, InvoiceSummary};
pub use errors::InvoiceError;
pub use ports::{InvoiceRepository, PageCache};
pub use validation::{
  FieldErrorKind, FieldErrors, InvoiceValidationError, RawInvoiceFields, ValidationResult,
  validate_invoice,
};
pub use value_objects::{Amount, AmountInCents, CustomerId, InvoiceStatus, ValueObjectError};

/// Path of the invoice list view; invalidated and redirected to after mutations.
pub const INVOICES_PATH: &str = "/dashboard/invoices";
