//! Dashboard aggregates: three independent count/sum queries fetched
//! concurrently with `tokio::try_join!` and assembled once all three
//! resolve. Failure of any one fails the whole fetch.

use sqlx::{PgPool, Row};

use tally_core::money::format_usd;

use super::DataError;

const CARD_DATA_FAILED: &str = "Failed to fetch card data.";

/// The four numbers on the dashboard overview cards.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Dashboard repository
pub struct DashboardRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DashboardRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn card_data(&self) -> Result<CardData, DataError> {
        let invoice_count = async {
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM invoices")
                .fetch_one(self.pool)
                .await
                .map_err(DataError::query(CARD_DATA_FAILED))
        };

        let customer_count = async {
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM customers")
                .fetch_one(self.pool)
                .await
                .map_err(DataError::query(CARD_DATA_FAILED))
        };

        let status_totals = async {
            sqlx::query(
                r#"
                SELECT
                    COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0) AS paid,
                    COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0) AS pending
                FROM invoices
                "#,
            )
            .fetch_one(self.pool)
            .await
            .map_err(DataError::query(CARD_DATA_FAILED))
        };

        let ((invoices,), (customers,), totals) =
            tokio::try_join!(invoice_count, customer_count, status_totals)?;

        Ok(CardData {
            number_of_invoices: invoices,
            number_of_customers: customers,
            total_paid_invoices: format_usd(totals.get::<i64, _>("paid")),
            total_pending_invoices: format_usd(totals.get::<i64, _>("pending")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn card_data_counts_seeded_rows() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::seed::run(&pool).await.expect("seed");

        let cards = DashboardRepo::new(&pool).card_data().await.expect("cards");
        assert!(cards.number_of_invoices > 0);
        assert!(cards.number_of_customers > 0);
        assert!(cards.total_paid_invoices.starts_with('$'));
        assert!(cards.total_pending_invoices.starts_with('$'));
    }
}
