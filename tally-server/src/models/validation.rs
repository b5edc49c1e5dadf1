//! Invoice form validation.
//!
//! The form arrives as raw optional strings; `InvoiceForm::validate`
//! either produces a fully typed [`ValidInvoice`] or a map of
//! per-field messages suitable for inline display. Messages are fixed
//! strings the dashboard front end relies on verbatim.

use serde::{Deserialize, Serialize};

use super::invoice::InvoiceStatus;

pub const MSG_SELECT_CUSTOMER: &str = "Please select a customer.";
pub const MSG_AMOUNT_TOO_LOW: &str = "Please enter an amount greater than $0.";
pub const MSG_SELECT_STATUS: &str = "Please select an invoice status.";

/// Raw invoice form submission, straight off the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Per-field validation messages, keyed the way the form renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// A validated, typed invoice submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoice {
    pub customer_id: String,
    pub amount_dollars: f64,
    pub status: InvoiceStatus,
}

impl InvoiceForm {
    /// Validate the raw fields. Pure: no I/O, never panics.
    pub fn validate(&self) -> Result<ValidInvoice, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = match self.customer_id.as_deref() {
            Some(id) if !id.is_empty() => Some(id.to_owned()),
            _ => {
                errors.customer_id.push(MSG_SELECT_CUSTOMER.to_owned());
                None
            }
        };

        let amount_dollars = match self.amount.as_deref().map(str::parse::<f64>) {
            Some(Ok(dollars)) if dollars.is_finite() && dollars > 0.0 => Some(dollars),
            _ => {
                errors.amount.push(MSG_AMOUNT_TOO_LOW.to_owned());
                None
            }
        };

        let status = match self.status.as_deref().map(str::parse::<InvoiceStatus>) {
            Some(Ok(status)) => Some(status),
            _ => {
                errors.status.push(MSG_SELECT_STATUS.to_owned());
                None
            }
        };

        match (customer_id, amount_dollars, status) {
            (Some(customer_id), Some(amount_dollars), Some(status)) => Ok(ValidInvoice {
                customer_id,
                amount_dollars,
                status,
            }),
            _ => Err(errors),
        }
    }
}
