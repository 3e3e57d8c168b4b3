use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoicedesk::{
  adapters::http::{TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::auth::AuthenticateUseCase,
  application::invoice::{
    CreateInvoiceUseCase, DeleteInvoiceUseCase, ListInvoicesUseCase, UpdateInvoiceUseCase,
  },
  domain::auth::{CredentialsIdentityProvider, IdentityProvider},
  domain::invoice::{InvoiceRepository, PageCache},
  infrastructure::{
    cache::{NoOpPageCache, RedisPageCache},
    config::{Config, RedisConfig},
    persistence::postgres::{PostgresInvoiceRepository, PostgresUserRepository},
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoicedesk=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting invoicedesk");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  tracing::info!("Connecting to database");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  let page_cache: Arc<dyn PageCache> = if config.cache.enabled {
    let conn = connect_redis(&config.redis).await?;
    Arc::new(RedisPageCache::new(
      conn,
      config.cache.key_prefix.clone(),
      config.cache.ttl_seconds,
    ))
  } else {
    tracing::warn!("Page cache disabled; views are rendered on every request");
    Arc::new(NoOpPageCache::new())
  };

  let invoice_repo: Arc<dyn InvoiceRepository> =
    Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));

  let password_hasher = Arc::new(Argon2PasswordHasher::new().map_err(|e| {
    tracing::error!("Failed to create password hasher: {}", e);
    std::io::Error::other(e.to_string())
  })?);

  let identity_provider: Arc<dyn IdentityProvider> = Arc::new(CredentialsIdentityProvider::new(
    user_repo,
    password_hasher,
    config.auth.sign_in_redirect.clone(),
  ));

  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to load templates: {}", e);
    std::io::Error::other(e.to_string())
  })?;
  tracing::info!("Template engine initialized");

  let deps = WebRouteDependencies {
    templates,
    page_cache: page_cache.clone(),
    authenticate_use_case: Arc::new(AuthenticateUseCase::new(identity_provider)),
    create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(
      invoice_repo.clone(),
      page_cache.clone(),
    )),
    update_invoice_use_case: Arc::new(UpdateInvoiceUseCase::new(
      invoice_repo.clone(),
      page_cache.clone(),
    )),
    delete_invoice_use_case: Arc::new(DeleteInvoiceUseCase::new(
      invoice_repo.clone(),
      page_cache,
    )),
    list_invoices_use_case: Arc::new(ListInvoicesUseCase::new(invoice_repo)),
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .configure(|cfg| configure_web_routes(cfg, deps.clone()))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

async fn connect_redis(
  config: &RedisConfig,
) -> std::io::Result<redis::aio::ConnectionManager> {
  tracing::info!("Connecting to Redis");

  let client = redis::Client::open(config.url.clone()).map_err(|e| {
    tracing::error!("Failed to create Redis client: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Invalid Redis URL: {}", e),
    )
  })?;

  let conn = tokio::time::timeout(
    Duration::from_secs(config.connect_timeout_seconds),
    client.get_connection_manager(),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Redis connection timed out after {} seconds. Is Redis running?",
      config.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Redis connection timed out after {} seconds",
        config.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to Redis: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      "Could not connect to Redis. Is Redis running?",
    )
  })?;

  tracing::info!("Redis connection established");
  Ok(conn)
}

async fn health_check() -> &'static str {
  "OK"
}
