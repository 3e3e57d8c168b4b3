use std::sync::Arc;

use crate::domain::invoice::{InvoiceError, InvoiceRepository, InvoiceSummary};

pub struct ListInvoicesUseCase {
  invoice_repo: Arc<dyn InvoiceRepository>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoice_repo }
  }

  /// All invoices, newest first.
  pub async fn execute(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    self.invoice_repo.list_summaries().await
  }
}
