//! Database layer - connection pool, schema, seed, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections), injected explicitly - no globals
//! - Reads shape rows close to the SQL, one repo per aggregate
//! - Rely on DB constraints for referential integrity
//! - The seed runs in a single transaction and rolls back wholesale

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::create_pool;
pub use repos::*;
