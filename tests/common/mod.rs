#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use uuid::Uuid;

use invoicedesk::adapters::http::{TemplateEngine, WebRouteDependencies};
use invoicedesk::application::auth::AuthenticateUseCase;
use invoicedesk::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceUseCase,
};
use invoicedesk::domain::NavigationSignal;
use invoicedesk::domain::auth::{
  AuthError, Credentials, Email, IdentityProvider, RepositoryError, SignInError, SignInStrategy,
  User, UserRepository,
};
use invoicedesk::domain::invoice::{
  InvoiceChanges, InvoiceError, InvoiceRecord, InvoiceRepository, InvoiceSummary, PageCache,
};

/// Builds a test service with the web routes wired to `$app.deps`.
macro_rules! init_app {
  ($app:expr) => {
    actix_web::test::init_service(actix_web::App::new().configure(|cfg| {
      invoicedesk::adapters::http::configure_web_routes(cfg, $app.deps.clone())
    }))
    .await
  };
}

/// Holds a listing between reading rows and returning them.
#[derive(Default)]
pub struct ListGate {
  pub entered: Notify,
  pub release: Notify,
}

/// Invoice store kept in memory; rejects non-UUID ids the way Postgres does.
#[derive(Default)]
pub struct InMemoryInvoices {
  pub rows: Mutex<HashMap<Uuid, InvoiceRecord>>,
  pub fail: bool,
  list_gate: Mutex<Option<Arc<ListGate>>>,
}

impl InMemoryInvoices {
  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Self::default()
    }
  }

  /// The next listing signals `entered` once it has read the rows, then
  /// waits for `release` before returning them.
  pub fn pause_next_listing(&self) -> Arc<ListGate> {
    let gate = Arc::new(ListGate::default());
    *self.list_gate.lock().unwrap() = Some(gate.clone());
    gate
  }

  fn check(&self) -> Result<(), InvoiceError> {
    if self.fail {
      return Err(InvoiceError::Repository("connection reset".to_string()));
    }
    Ok(())
  }

  fn parse_id(id: &str) -> Result<Uuid, InvoiceError> {
    Uuid::parse_str(id)
      .map_err(|e| InvoiceError::Repository(format!("invalid input syntax for type uuid: {}", e)))
  }

  pub fn snapshot(&self) -> Vec<InvoiceRecord> {
    self.rows.lock().unwrap().values().cloned().collect()
  }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoices {
  async fn create(&self, invoice: InvoiceRecord) -> Result<(), InvoiceError> {
    self.check()?;
    self.rows.lock().unwrap().insert(invoice.id, invoice);
    Ok(())
  }

  async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), InvoiceError> {
    self.check()?;
    let id = Self::parse_id(id)?;
    if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
      row.customer_id = changes.customer_id;
      row.amount = changes.amount;
      row.status = changes.status;
    }
    Ok(())
  }

  async fn delete(&self, id: &str) -> Result<(), InvoiceError> {
    self.check()?;
    let id = Self::parse_id(id)?;
    self.rows.lock().unwrap().remove(&id);
    Ok(())
  }

  async fn list_summaries(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    self.check()?;
    let mut rows: Vec<InvoiceRecord> = self.snapshot();
    let gate = self.list_gate.lock().unwrap().take();
    if let Some(gate) = gate {
      gate.entered.notify_one();
      gate.release.notified().await;
    }
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(
      rows
        .into_iter()
        .map(|r| InvoiceSummary {
          id: r.id,
          customer_id: r.customer_id.value().to_string(),
          customer_name: None,
          amount: r.amount.to_string(),
          status: r.status.as_str().to_string(),
          date: r.date,
        })
        .collect(),
    )
  }
}

/// Page cache backed by a map, recording every invalidation.
#[derive(Default)]
pub struct MemoryPageCache {
  pub pages: Mutex<HashMap<String, String>>,
  pub invalidated: Mutex<Vec<String>>,
  generations: Mutex<HashMap<String, u64>>,
}

#[async_trait]
impl PageCache for MemoryPageCache {
  async fn get(&self, path: &str) -> Option<String> {
    self.pages.lock().unwrap().get(path).cloned()
  }

  async fn generation(&self, path: &str) -> u64 {
    self
      .generations
      .lock()
      .unwrap()
      .get(path)
      .copied()
      .unwrap_or(0)
  }

  async fn put(&self, path: &str, html: &str, generation: u64) {
    let generations = self.generations.lock().unwrap();
    if generations.get(path).copied().unwrap_or(0) == generation {
      self
        .pages
        .lock()
        .unwrap()
        .insert(path.to_string(), html.to_string());
    }
  }

  async fn invalidate(&self, path: &str) {
    *self
      .generations
      .lock()
      .unwrap()
      .entry(path.to_string())
      .or_insert(0) += 1;
    self.pages.lock().unwrap().remove(path);
    self.invalidated.lock().unwrap().push(path.to_string());
  }
}

/// User store whose connection pool is gone.
pub struct UnreachableUsers;

#[async_trait]
impl UserRepository for UnreachableUsers {
  async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, RepositoryError> {
    Err(RepositoryError::ConnectionFailed("Pool timed out".to_string()))
  }
}

/// Accepts exactly one email/password pair.
///
/// With `crash` set, every sign-in fails with an error the provider did not
/// classify.
pub struct OnePasswordProvider {
  pub email: &'static str,
  pub password: &'static str,
  pub crash: bool,
}

#[async_trait]
impl IdentityProvider for OnePasswordProvider {
  async fn sign_in(
    &self,
    _strategy: SignInStrategy,
    credentials: &Credentials,
  ) -> Result<NavigationSignal, SignInError> {
    if self.crash {
      return Err(SignInError::Unclassified(anyhow::anyhow!("session store exploded")));
    }
    match (credentials.email.as_deref(), credentials.password.as_deref()) {
      (Some(email), Some(password)) if email == self.email && password == self.password => {
        Ok(NavigationSignal::redirect("/dashboard"))
      }
      (None, _) => Err(AuthError::CallbackRouteError("no email".to_string()).into()),
      _ => Err(AuthError::CredentialsSignin.into()),
    }
  }
}

pub struct TestApp {
  pub invoices: Arc<InMemoryInvoices>,
  pub cache: Arc<MemoryPageCache>,
  pub deps: WebRouteDependencies,
}

pub fn build(invoices: InMemoryInvoices, provider: impl IdentityProvider + 'static) -> TestApp {
  let invoices = Arc::new(invoices);
  let cache = Arc::new(MemoryPageCache::default());

  let deps = WebRouteDependencies {
    templates: TemplateEngine::new().expect("templates load"),
    page_cache: cache.clone(),
    authenticate_use_case: Arc::new(AuthenticateUseCase::new(Arc::new(provider))),
    create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(invoices.clone(), cache.clone())),
    update_invoice_use_case: Arc::new(UpdateInvoiceUseCase::new(invoices.clone(), cache.clone())),
    delete_invoice_use_case: Arc::new(DeleteInvoiceUseCase::new(invoices.clone(), cache.clone())),
    list_invoices_use_case: Arc::new(ListInvoicesUseCase::new(invoices.clone())),
  };

  TestApp {
    invoices,
    cache,
    deps,
  }
}

pub fn provider() -> OnePasswordProvider {
  OnePasswordProvider {
    email: "user@nextmail.com",
    password: "123456",
    crash: false,
  }
}
