//! Recording doubles for the invoice actions.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::invoice::{
  InvoiceChanges, InvoiceError, InvoiceRecord, InvoiceRepository, InvoiceSummary, PageCache,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
  Created(InvoiceRecord),
  Updated(String, InvoiceChanges),
  Deleted(String),
  Invalidated(String),
}

type Journal = Arc<Mutex<Vec<Event>>>;

pub(crate) struct RecordingRepository {
  journal: Journal,
  fail: bool,
}

impl RecordingRepository {
  fn record(&self, event: Event) -> Result<(), InvoiceError> {
    if self.fail {
      return Err(InvoiceError::Database(sqlx::Error::PoolTimedOut));
    }
    self.journal.lock().unwrap().push(event);
    Ok(())
  }
}

#[async_trait]
impl InvoiceRepository for RecordingRepository {
  async fn create(&self, invoice: InvoiceRecord) -> Result<(), InvoiceError> {
    self.record(Event::Created(invoice))
  }

  async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), InvoiceError> {
    self.record(Event::Updated(id.to_string(), changes))
  }

  async fn delete(&self, id: &str) -> Result<(), InvoiceError> {
    self.record(Event::Deleted(id.to_string()))
  }

  async fn list_summaries(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    Ok(Vec::new())
  }
}

pub(crate) struct RecordingCache {
  journal: Journal,
}

#[async_trait]
impl PageCache for RecordingCache {
  async fn get(&self, _path: &str) -> Option<String> {
    None
  }

  async fn generation(&self, _path: &str) -> u64 {
    0
  }

  async fn put(&self, _path: &str, _html: &str, _generation: u64) {}

  async fn invalidate(&self, path: &str) {
    self
      .journal
      .lock()
      .unwrap()
      .push(Event::Invalidated(path.to_string()));
  }
}

/// Repository and cache sharing one journal, so tests can assert ordering.
pub(crate) struct Harness {
  journal: Journal,
  fail: bool,
}

impl Harness {
  pub(crate) fn new() -> Self {
    Self {
      journal: Arc::default(),
      fail: false,
    }
  }

  /// Every repository call fails with a database error.
  pub(crate) fn failing() -> Self {
    Self {
      journal: Arc::default(),
      fail: true,
    }
  }

  pub(crate) fn repo(&self) -> Arc<dyn InvoiceRepository> {
    Arc::new(RecordingRepository {
      journal: self.journal.clone(),
      fail: self.fail,
    })
  }

  pub(crate) fn cache(&self) -> Arc<dyn PageCache> {
    Arc::new(RecordingCache {
      journal: self.journal.clone(),
    })
  }

  pub(crate) fn events(&self) -> Vec<Event> {
    self.journal.lock().unwrap().clone()
  }
}
