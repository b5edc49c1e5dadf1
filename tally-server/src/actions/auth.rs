//! Login action: delegate to the credential verifier and classify the
//! failure into one of two fixed messages.

use crate::auth::{AuthError, CredentialVerifier};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const MSG_AUTH_FALLBACK: &str = "Something went wrong.";

/// Attempt a sign-in. Returns `None` on success, otherwise the
/// message to show on the login form.
pub async fn authenticate(
    verifier: &dyn CredentialVerifier,
    email: &str,
    password: &str,
) -> Option<String> {
    match verifier.verify(email, password).await {
        Ok(()) => None,
        Err(AuthError::InvalidCredentials) => Some(MSG_INVALID_CREDENTIALS.to_owned()),
        Err(err) => {
            tracing::error!(error = %err, "authentication backend failure");
            Some(MSG_AUTH_FALLBACK.to_owned())
        }
    }
}
