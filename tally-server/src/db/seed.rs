//! Development seed: schema plus placeholder rows, all inside one
//! transaction. Any failure rolls the whole thing back. Fixture rows
//! carry fixed UUIDs so `ON CONFLICT DO NOTHING` makes re-seeding a
//! no-op.
//!
//! This is a development convenience, not production infrastructure.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::hash_password;
use crate::db::migrations;

use fixtures::{CUSTOMERS, INVOICES, REVENUE, USERS};

/// Create missing tables and insert fixture data atomically.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    migrations::run_in_tx(&mut tx).await?;

    for user in USERS {
        let hashed = hash_password(user.password);
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(Uuid::parse_str(user.id).expect("fixture uuid"))
        .bind(user.name)
        .bind(user.email)
        .bind(&hashed)
        .execute(&mut *tx)
        .await?;
    }

    for customer in CUSTOMERS {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(Uuid::parse_str(customer.id).expect("fixture uuid"))
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .execute(&mut *tx)
        .await?;
    }

    for invoice in INVOICES {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5::date)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(Uuid::parse_str(invoice.id).expect("fixture uuid"))
        .bind(Uuid::parse_str(invoice.customer_id).expect("fixture uuid"))
        .bind(invoice.amount)
        .bind(invoice.status)
        .bind(invoice.date)
        .execute(&mut *tx)
        .await?;
    }

    for rev in REVENUE {
        sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(rev.month)
        .bind(rev.revenue)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        users = USERS.len(),
        customers = CUSTOMERS.len(),
        invoices = INVOICES.len(),
        revenue = REVENUE.len(),
        "database seeded"
    );
    Ok(())
}

pub mod fixtures {
    //! Placeholder rows for local development.

    pub struct UserFixture {
        pub id: &'static str,
        pub name: &'static str,
        pub email: &'static str,
        pub password: &'static str,
    }

    pub struct CustomerFixture {
        pub id: &'static str,
        pub name: &'static str,
        pub email: &'static str,
        pub image_url: &'static str,
    }

    pub struct InvoiceFixture {
        pub id: &'static str,
        pub customer_id: &'static str,
        /// Stored cents.
        pub amount: i32,
        pub status: &'static str,
        /// ISO calendar date.
        pub date: &'static str,
    }

    pub struct RevenueFixture {
        pub month: &'static str,
        pub revenue: i32,
    }

    pub const USERS: &[UserFixture] = &[UserFixture {
        id: "410544b2-4001-4271-9855-fec4b6a6442a",
        name: "User",
        email: "user@tally.dev",
        password: "123456",
    }];

    pub const CUSTOMERS: &[CustomerFixture] = &[
        CustomerFixture {
            id: "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
            name: "Evil Rabbit",
            email: "evil@rabbit.com",
            image_url: "/customers/evil-rabbit.png",
        },
        CustomerFixture {
            id: "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            name: "Delba de Oliveira",
            email: "delba@oliveira.com",
            image_url: "/customers/delba-de-oliveira.png",
        },
        CustomerFixture {
            id: "3958dc9e-742f-4377-85e9-fec4b6a6442a",
            name: "Lee Robinson",
            email: "lee@robinson.com",
            image_url: "/customers/lee-robinson.png",
        },
        CustomerFixture {
            id: "76d65c26-f784-44a2-ac19-586678f7c2f2",
            name: "Michael Novotny",
            email: "michael@novotny.com",
            image_url: "/customers/michael-novotny.png",
        },
        CustomerFixture {
            id: "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            name: "Amy Burns",
            email: "amy@burns.com",
            image_url: "/customers/amy-burns.png",
        },
        CustomerFixture {
            id: "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            name: "Balazs Orban",
            email: "balazs@orban.com",
            image_url: "/customers/balazs-orban.png",
        },
    ];

    pub const INVOICES: &[InvoiceFixture] = &[
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e001",
            customer_id: "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
            amount: 15795,
            status: "pending",
            date: "2022-12-06",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e002",
            customer_id: "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            amount: 20348,
            status: "pending",
            date: "2022-11-14",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e003",
            customer_id: "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            amount: 3040,
            status: "paid",
            date: "2022-10-29",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e004",
            customer_id: "76d65c26-f784-44a2-ac19-586678f7c2f2",
            amount: 44800,
            status: "paid",
            date: "2023-09-10",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e005",
            customer_id: "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            amount: 34577,
            status: "pending",
            date: "2023-08-05",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e006",
            customer_id: "3958dc9e-742f-4377-85e9-fec4b6a6442a",
            amount: 54246,
            status: "pending",
            date: "2023-07-16",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e007",
            customer_id: "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa",
            amount: 666,
            status: "pending",
            date: "2023-06-27",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e008",
            customer_id: "76d65c26-f784-44a2-ac19-586678f7c2f2",
            amount: 32545,
            status: "paid",
            date: "2023-06-09",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e009",
            customer_id: "cc27c14a-0acf-4f4a-a6c9-d45682c144b9",
            amount: 1250,
            status: "paid",
            date: "2023-06-17",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e010",
            customer_id: "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            amount: 8546,
            status: "paid",
            date: "2023-06-07",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e011",
            customer_id: "3958dc9e-712f-4377-85e9-fec4b6a6442a",
            amount: 500,
            status: "paid",
            date: "2023-08-19",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e012",
            customer_id: "13d07535-c59e-4157-a011-f8d2ef4e0cbb",
            amount: 8945,
            status: "paid",
            date: "2023-06-03",
        },
        InvoiceFixture {
            id: "9d1c25a1-1f54-4a7e-94a8-2bceb5f1e013",
            customer_id: "3958dc9e-742f-4377-85e9-fec4b6a6442a",
            amount: 1000,
            status: "paid",
            date: "2022-06-05",
        },
    ];

    pub const REVENUE: &[RevenueFixture] = &[
        RevenueFixture { month: "Jan", revenue: 2000 },
        RevenueFixture { month: "Feb", revenue: 1800 },
        RevenueFixture { month: "Mar", revenue: 2200 },
        RevenueFixture { month: "Apr", revenue: 2500 },
        RevenueFixture { month: "May", revenue: 2300 },
        RevenueFixture { month: "Jun", revenue: 3200 },
        RevenueFixture { month: "Jul", revenue: 3500 },
        RevenueFixture { month: "Aug", revenue: 3700 },
        RevenueFixture { month: "Sep", revenue: 2500 },
        RevenueFixture { month: "Oct", revenue: 2800 },
        RevenueFixture { month: "Nov", revenue: 3000 },
        RevenueFixture { month: "Dec", revenue: 4800 },
    ];
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for c in CUSTOMERS {
            assert!(uuid::Uuid::parse_str(c.id).is_ok());
            assert!(seen.insert(c.id));
        }
        for i in INVOICES {
            assert!(uuid::Uuid::parse_str(i.id).is_ok());
            assert!(seen.insert(i.id));
        }
    }

    #[test]
    fn invoices_reference_seeded_customers() {
        let customers: HashSet<_> = CUSTOMERS.iter().map(|c| c.id).collect();
        for invoice in INVOICES {
            assert!(customers.contains(invoice.customer_id));
        }
    }

    #[test]
    fn fixture_statuses_parse() {
        for invoice in INVOICES {
            assert!(invoice
                .status
                .parse::<crate::models::InvoiceStatus>()
                .is_ok());
        }
    }

    #[test]
    fn revenue_covers_twelve_months_with_short_labels() {
        assert_eq!(REVENUE.len(), 12);
        for r in REVENUE {
            assert!(r.month.len() <= 4);
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        super::run(&pool).await.expect("first seed");
        super::run(&pool).await.expect("second seed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM revenue")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 12);
    }
}
