//! Credential verification seam.
//!
//! The login action only needs something that takes an email/password
//! pair and either succeeds or classifies the failure, so that is the
//! whole trait. The shipped implementation checks the `users` table
//! with PBKDF2 hashes; tests can substitute anything.

use async_trait::async_trait;
use sqlx::PgPool;

pub mod password;

pub use password::{hash_password, verify_password};

/// Classified authentication failure.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("authentication backend error: {0}")]
    Internal(#[source] sqlx::Error),
}

/// External credential-verification collaborator.
#[async_trait]
pub trait CredentialVerifier: Send + Sync + 'static {
    async fn verify(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Verifier backed by the `users` table.
pub struct PgCredentialVerifier {
    pool: PgPool,
}

impl PgCredentialVerifier {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialVerifier for PgCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT password FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(AuthError::Internal)?;

        match row {
            Some((stored,)) if verify_password(password, &stored) => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeded_user_verifies() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::seed::run(&pool).await.expect("seed");

        let verifier = PgCredentialVerifier::new(pool);
        verifier
            .verify("user@tally.dev", "123456")
            .await
            .expect("seeded credentials should verify");

        let err = verifier
            .verify("user@tally.dev", "wrong")
            .await
            .expect_err("wrong password must fail");
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
