//! tally-core: domain primitives for the Tally invoicing dashboard
//!
//! Pure money arithmetic (dollars vs. stored cents), currency display
//! formatting, and environment-driven configuration. No I/O beyond
//! reading environment variables at configuration time.

pub mod config;
pub mod error;
pub mod money;

pub use config::DatabaseConfig;
pub use error::CoreError;
pub use money::{cents_to_dollars, dollars_to_cents_rounded, dollars_to_cents_trunc, format_usd};
