//! Domain models with validation at construction
//!
//! Raw form input is checked before any database work happens. Invalid
//! input produces a field-error map, never a panic and never I/O.

pub mod invoice;
pub mod validation;

pub use invoice::InvoiceStatus;
pub use validation::{FieldErrors, InvoiceForm, ValidInvoice};
