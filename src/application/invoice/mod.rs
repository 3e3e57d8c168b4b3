mod create_invoice;
mod delete_invoice;
mod list_invoices;
mod update_invoice;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_invoice::CreateInvoiceUseCase;
pub use delete_invoice::DeleteInvoiceUseCase;
pub use list_invoices::ListInvoicesUseCase;
pub use update_invoice::UpdateInvoiceUseCase;

use crate::application::outcome::{ActionOutcome, ActionState};
use crate::domain::invoice::{INVOICES_PATH, PageCache};
use crate::domain::navigation::NavigationSignal;

/// Tail shared by create and update: invalidate the list view, then leave.
async fn revalidate_and_redirect(page_cache: &dyn PageCache) -> ActionOutcome<ActionState> {
  page_cache.invalidate(INVOICES_PATH).await;
  ActionOutcome::Redirect(NavigationSignal::redirect(INVOICES_PATH))
}
