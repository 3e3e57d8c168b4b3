use std::sync::Arc;

use crate::application::outcome::{ActionOutcome, ActionState};
use crate::domain::invoice::{INVOICES_PATH, InvoiceRepository, PageCache};

pub const DATABASE_ERROR_MESSAGE: &str = "Database Error: Failed to Delete Invoice.";

pub struct DeleteInvoiceUseCase {
  invoice_repo: Arc<dyn InvoiceRepository>,
  page_cache: Arc<dyn PageCache>,
}

impl DeleteInvoiceUseCase {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>, page_cache: Arc<dyn PageCache>) -> Self {
    Self {
      invoice_repo,
      page_cache,
    }
  }

  /// Deletes invoice `id` and invalidates the list view. No redirect: the
  /// action is triggered from the list itself.
  ///
  /// `id` is not validated here. It comes from a link the list view
  /// generated; a malformed value is rejected by the store and reported as
  /// a database error.
  pub async fn execute(&self, id: &str) -> ActionOutcome<ActionState> {
    if let Err(e) = self.invoice_repo.delete(id).await {
      tracing::error!("Failed to delete invoice {}: {}", id, e);
      return ActionOutcome::Failed(ActionState::with_message(DATABASE_ERROR_MESSAGE));
    }

    tracing::info!("Deleted invoice {}", id);
    self.page_cache.invalidate(INVOICES_PATH).await;
    ActionOutcome::Completed
  }
}
