//! Invoice queries: latest five, filtered/paginated list, page count,
//! single lookup, and the amount-666 diagnostic.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use tally_core::money::{cents_to_dollars, format_usd};

use super::DataError;

/// Fixed page size for the invoice list.
pub const ITEMS_PER_PAGE: i64 = 6;

/// An invoice row for the dashboard's latest-invoices card.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Formatted currency string, e.g. `$1,234.56`.
    pub amount: String,
}

/// A row of the filtered invoice table.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct FilteredInvoice {
    pub id: Uuid,
    /// Stored cents.
    pub amount: i32,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// A single invoice as loaded for the edit form.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InvoiceDetail {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Decimal dollars (stored cents divided by 100).
    pub amount: f64,
    pub status: String,
}

/// Row shape for the `/query` diagnostic endpoint.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct DiagnosticInvoice {
    pub amount: i32,
    pub name: String,
}

const FILTER_PREDICATE: &str = r#"
    customers.name ILIKE $1 OR
    customers.email ILIKE $1 OR
    invoices.amount::text ILIKE $1 OR
    invoices.date::text ILIKE $1 OR
    invoices.status ILIKE $1
"#;

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The five most recent invoices with their customers, amounts
    /// formatted for display.
    pub async fn latest(&self) -> Result<Vec<LatestInvoice>, DataError> {
        let rows = sqlx::query(
            r#"
            SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT 5
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DataError::query("Failed to fetch the latest invoices."))?;

        Ok(rows
            .into_iter()
            .map(|row| LatestInvoice {
                id: row.get("id"),
                name: row.get("name"),
                image_url: row.get("image_url"),
                email: row.get("email"),
                amount: format_usd(row.get::<i32, _>("amount") as i64),
            })
            .collect())
    }

    /// One page of invoices matching a free-text filter, newest first.
    ///
    /// The filter is a case-insensitive substring match across customer
    /// name/email and the invoice amount, date, and status cast to text.
    /// Pages are 1-based and six rows long.
    pub async fn filtered(
        &self,
        query: &str,
        page: i64,
    ) -> Result<Vec<FilteredInvoice>, DataError> {
        let offset = (page - 1) * ITEMS_PER_PAGE;
        let pattern = format!("%{query}%");

        let sql = format!(
            r#"
            SELECT
                invoices.id,
                invoices.amount,
                invoices.date,
                invoices.status,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {FILTER_PREDICATE}
            ORDER BY invoices.date DESC
            LIMIT $2 OFFSET $3
            "#
        );

        sqlx::query_as::<_, FilteredInvoice>(&sql)
            .bind(&pattern)
            .bind(ITEMS_PER_PAGE)
            .bind(offset)
            .fetch_all(self.pool)
            .await
            .map_err(DataError::query("Failed to fetch invoices."))
    }

    /// Number of pages the filtered list spans (ceiling division by the
    /// page size).
    pub async fn page_count(&self, query: &str) -> Result<i64, DataError> {
        let pattern = format!("%{query}%");

        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {FILTER_PREDICATE}
            "#
        );

        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(&pattern)
            .fetch_one(self.pool)
            .await
            .map_err(DataError::query(
                "Failed to fetch total number of invoices.",
            ))?;

        Ok(pages_for(count))
    }

    /// A single invoice by id, cents converted back to decimal dollars.
    pub async fn by_id(&self, id: Uuid) -> Result<InvoiceDetail, DataError> {
        let row = sqlx::query(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                invoices.amount,
                invoices.status
            FROM invoices
            WHERE invoices.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DataError::query("Failed to fetch invoice."))?
        .ok_or_else(|| DataError::NotFound {
            resource: "invoice",
            id: id.to_string(),
        })?;

        Ok(InvoiceDetail {
            id: row.get("id"),
            customer_id: row.get("customer_id"),
            amount: cents_to_dollars(row.get::<i32, _>("amount") as i64),
            status: row.get("status"),
        })
    }

    /// Diagnostic lookup used by `/query`: invoices stored at an exact
    /// cent amount, joined to the customer name.
    pub async fn with_amount(&self, cents: i32) -> Result<Vec<DiagnosticInvoice>, DataError> {
        sqlx::query_as::<_, DiagnosticInvoice>(
            r#"
            SELECT invoices.amount, customers.name
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE invoices.amount = $1
            "#,
        )
        .bind(cents)
        .fetch_all(self.pool)
        .await
        .map_err(DataError::query("Failed to fetch invoices."))
    }
}

/// Ceiling division of a row count by the page size.
fn pages_for(count: i64) -> i64 {
    (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}
