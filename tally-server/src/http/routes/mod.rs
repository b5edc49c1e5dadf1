//! Route handlers organized by resource

pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod login;
pub mod query;
pub mod seed;
