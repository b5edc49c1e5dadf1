//! Customer queries: the pick-list of names and the aggregated table
//! with per-customer pending/paid totals.

use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use tally_core::money::format_usd;

use super::DataError;

/// Customer id/name pair for the invoice form's select box.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct CustomerName {
    pub id: Uuid,
    pub name: String,
}

/// Aggregated customer row: invoice count plus formatted totals.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CustomerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers, id and name only, ordered by name.
    pub async fn names(&self) -> Result<Vec<CustomerName>, DataError> {
        sqlx::query_as::<_, CustomerName>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(DataError::query("Failed to fetch all customers."))
    }

    /// Customers matching a name/email filter, left-joined to their
    /// invoices and grouped, with pending/paid totals formatted as
    /// currency.
    pub async fn filtered(&self, query: &str) -> Result<Vec<CustomerSummary>, DataError> {
        let pattern = format!("%{query}%");

        let rows = sqlx::query(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0) AS total_pending,
                COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await
        .map_err(DataError::query("Failed to fetch customer table."))?;

        Ok(rows
            .into_iter()
            .map(|row| CustomerSummary {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                image_url: row.get("image_url"),
                total_invoices: row.get("total_invoices"),
                total_pending: format_usd(row.get::<i64, _>("total_pending")),
                total_paid: format_usd(row.get::<i64, _>("total_paid")),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn names_are_sorted() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::seed::run(&pool).await.expect("seed");

        let names = CustomerRepo::new(&pool).names().await.expect("names");
        assert!(!names.is_empty());
        for pair in names.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }
}
