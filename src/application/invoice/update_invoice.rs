use std::sync::Arc;

use super::revalidate_and_redirect;
use crate::application::form_data::FormData;
use crate::application::outcome::{ActionOutcome, ActionState};
use crate::domain::invoice::{InvoiceChanges, InvoiceRepository, PageCache, validate_invoice};

pub const INVALID_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Update Invoice.";
pub const DATABASE_ERROR_MESSAGE: &str = "Database Error: Failed to Update Invoice.";

pub struct UpdateInvoiceUseCase {
  invoice_repo: Arc<dyn InvoiceRepository>,
  page_cache: Arc<dyn PageCache>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>, page_cache: Arc<dyn PageCache>) -> Self {
    Self {
      invoice_repo,
      page_cache,
    }
  }

  /// Rewrites customer, amount and status of invoice `id`. The creation date
  /// is left alone.
  pub async fn execute(
    &self,
    id: &str,
    _prev_state: &ActionState,
    form: &FormData,
  ) -> ActionOutcome<ActionState> {
    let input = match validate_invoice(&form.invoice_fields()) {
      Ok(input) => input,
      Err(e) => {
        tracing::debug!("Update of invoice {} rejected: {:?}", id, e.kinds());
        return ActionOutcome::Failed(ActionState::invalid(
          e.field_errors(),
          INVALID_FIELDS_MESSAGE,
        ));
      }
    };

    if let Err(e) = self
      .invoice_repo
      .update(id, InvoiceChanges::from(input))
      .await
    {
      tracing::error!("Failed to update invoice {}: {}", id, e);
      return ActionOutcome::Failed(ActionState::with_message(DATABASE_ERROR_MESSAGE));
    }

    tracing::info!("Updated invoice {}", id);
    revalidate_and_redirect(self.page_cache.as_ref()).await
  }
}
