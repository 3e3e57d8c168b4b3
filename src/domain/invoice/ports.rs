use async_trait::async_trait;

use super::entities::{InvoiceChanges, InvoiceRecord, InvoiceSummary};
use super::errors::InvoiceError;

/// Persistence gateway for invoices. Each write is a single statement.
///
/// Identifiers are passed through as received; the store is responsible for
/// rejecting ones that are not valid UUIDs.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  async fn create(&self, invoice: InvoiceRecord) -> Result<(), InvoiceError>;
  async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), InvoiceError>;
  async fn delete(&self, id: &str) -> Result<(), InvoiceError>;
  async fn list_summaries(&self) -> Result<Vec<InvoiceSummary>, InvoiceError>;
}

/// Cache of rendered views, keyed by request path.
///
/// Every path carries a generation that [`PageCache::invalidate`] bumps. A
/// renderer reads the generation before loading its data and hands it back to
/// [`PageCache::put`], which drops the page if an invalidation happened in
/// between.
///
/// Cache failures never fail an action: implementations log and carry on.
#[async_trait]
pub trait PageCache: Send + Sync {
  async fn get(&self, path: &str) -> Option<String>;
  async fn generation(&self, path: &str) -> u64;
  /// Stores `html` only while `path` is still at `generation`.
  async fn put(&self, path: &str, html: &str, generation: u64);
  /// Marks the view at `path` stale so the next request re-renders it.
  async fn invalidate(&self, path: &str);
}
