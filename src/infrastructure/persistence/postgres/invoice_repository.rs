use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::invoice::{
  AmountInCents, InvoiceChanges, InvoiceRecord, InvoiceSummary, errors::InvoiceError,
  ports::InvoiceRepository,
};

#[derive(Debug, FromRow)]
struct InvoiceSummaryRow {
  id: Uuid,
  customer_id: String,
  customer_name: Option<String>,
  amount: i64,
  status: String,
  date: NaiveDate,
}

impl From<InvoiceSummaryRow> for InvoiceSummary {
  fn from(row: InvoiceSummaryRow) -> Self {
    InvoiceSummary {
      id: row.id,
      customer_id: row.customer_id,
      customer_name: row.customer_name,
      amount: AmountInCents::from_db(row.amount).to_string(),
      status: row.status,
      date: row.date,
    }
  }
}

/// Invoice persistence gateway over PostgreSQL.
///
/// String identifiers are cast with `::uuid` inside the statement, so a
/// malformed id surfaces as a database error instead of being checked here.
pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn create(&self, invoice: InvoiceRecord) -> Result<(), InvoiceError> {
    sqlx::query(
      r#"
      INSERT INTO invoices (id, customer_id, amount, status, date)
      VALUES ($1, $2::uuid, $3, $4, $5)
      "#,
    )
    .bind(invoice.id)
    .bind(invoice.customer_id.value())
    .bind(invoice.amount.value())
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn update(&self, id: &str, changes: InvoiceChanges) -> Result<(), InvoiceError> {
    let result = sqlx::query(
      r#"
      UPDATE invoices
      SET customer_id = $2::uuid, amount = $3, status = $4
      WHERE id = $1::uuid
      "#,
    )
    .bind(id)
    .bind(changes.customer_id.value())
    .bind(changes.amount.value())
    .bind(changes.status.as_str())
    .execute(&self.pool)
    .await?;

    if result.rows_affected() == 0 {
      tracing::warn!("Update matched no invoice with id {}", id);
    }

    Ok(())
  }

  async fn delete(&self, id: &str) -> Result<(), InvoiceError> {
    sqlx::query(
      r#"
      DELETE FROM invoices
      WHERE id = $1::uuid
      "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn list_summaries(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceSummaryRow>(
      r#"
      SELECT i.id, i.customer_id::text AS customer_id, c.name AS customer_name,
             i.amount, i.status, i.date
      FROM invoices i
      LEFT JOIN customers c ON c.id = i.customer_id
      ORDER BY i.date DESC, i.id
      "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(InvoiceSummary::from).collect())
  }
}
