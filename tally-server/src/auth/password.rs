//! PBKDF2-HMAC-SHA256 password hashing.
//!
//! Stored format: `pbkdf2$<iterations>$<salt-b64>$<hash-b64>`, salted
//! per user. Verification derives with the stored parameters and
//! compares in constant time.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

const OUTPUT_LEN: usize = 32;
const SALT_LEN: usize = 16;
const ITERATIONS: u32 = 100_000;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut out = [0u8; OUTPUT_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut out);

    format!(
        "pbkdf2${}${}${}",
        ITERATIONS,
        B64.encode(salt),
        B64.encode(out)
    )
}

/// Verify a password against a stored hash string.
///
/// Unparseable stored values verify as false rather than erroring.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some("pbkdf2"), Some(iterations), Some(salt), Some(expected)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    if iterations == 0 {
        return false;
    }
    let (Ok(salt), Ok(expected)) = (B64.decode(salt), B64.decode(expected)) else {
        return false;
    };
    if expected.len() != OUTPUT_LEN {
        return false;
    }

    // Derive and constant-time compare.
    let mut out = [0u8; OUTPUT_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut out);
    subtle::ConstantTimeEq::ct_eq(&out[..], &expected[..]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let stored = hash_password("123456");
        assert!(verify_password("123456", &stored));
        assert!(!verify_password("123457", &stored));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[test]
    fn malformed_stored_value_is_rejected() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "plaintext"));
        assert!(!verify_password("x", "pbkdf2$abc$notb64$notb64"));
        assert!(!verify_password("x", "pbkdf2$0$AAAA$AAAA"));
    }
}
