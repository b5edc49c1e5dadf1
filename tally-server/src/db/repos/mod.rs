//! Repositories for the read side of the dashboard
//!
//! Each repo borrows the pool and exposes the queries one page needs.
//! Database failures are logged with their cause and surfaced as
//! [`DataError::Query`] carrying only a fixed user-facing message; the
//! cause rides along as `source()` for anyone logging upstream but is
//! never serialized to a client.

pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod revenue;

pub use customers::{CustomerName, CustomerRepo, CustomerSummary};
pub use dashboard::{CardData, DashboardRepo};
pub use invoices::{
    DiagnosticInvoice, FilteredInvoice, InvoiceDetail, InvoiceRepo, LatestInvoice, ITEMS_PER_PAGE,
};
pub use revenue::{Revenue, RevenueRepo};

/// Read-side database error with a fixed external message.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{message}")]
    Query {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DataError {
    /// Log the underlying error and wrap it with the fixed message.
    pub(crate) fn query(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| {
            tracing::error!(error = %source, "database error: {message}");
            Self::Query { message, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_displays_fixed_message_only() {
        let err = DataError::query("Failed to fetch invoices.")(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "Failed to fetch invoices.");
        // Cause is retained for server-side logging.
        assert!(std::error::Error::source(&err).is_some());
    }
}
