//! Monthly revenue rows for the dashboard chart. Read-only seed data.

use sqlx::{FromRow, PgPool};

use super::DataError;

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// Revenue repository
pub struct RevenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Revenue>, DataError> {
        sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(self.pool)
            .await
            .map_err(DataError::query("Failed to fetch revenue data."))
    }
}
