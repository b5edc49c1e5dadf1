//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is built
//! once at startup and handed down to whoever needs it; there is no
//! explicit teardown beyond process exit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a single dashboard instance.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection cap.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p tally-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_round_trips_a_parameter() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let (echo,): (String,) = sqlx::query_as("SELECT $1::text")
            .bind("tally")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(echo, "tally");
    }

    // More tasks than connections; the cap queues them rather than
    // failing acquisition.
    #[tokio::test]
    #[ignore = "requires database"]
    async fn small_cap_serves_more_tasks_than_connections() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 2)
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (1..=8)
            .map(|i: i32| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let (squared,): (i32,) = sqlx::query_as("SELECT $1::int * $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("query failed");
                    squared
                })
            })
            .collect();

        for (i, handle) in (1..=8).zip(handles) {
            assert_eq!(handle.await.expect("task panicked"), i * i);
        }
    }
}
