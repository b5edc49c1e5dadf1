//! Schema bootstrap.
//!
//! `CREATE TABLE IF NOT EXISTS` for the four dashboard tables, safe to
//! run repeatedly. UUID primary keys come from the uuid-ossp extension.

use sqlx::PgPool;
use tracing::info;

const SCHEMA: &[&str] = &[
    r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
    "#,
];

/// Create any missing tables on the pool.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("database schema up to date");
    Ok(())
}

/// Create any missing tables inside an existing transaction.
///
/// Used by the seed so that schema creation and fixture inserts
/// commit or roll back together.
pub async fn run_in_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut **tx).await?;
    }
    Ok(())
}
