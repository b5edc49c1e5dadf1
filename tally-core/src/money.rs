//! Dollars/cents conversion and USD display formatting.
//!
//! Invoices store amounts as integer cents; forms and API responses
//! speak decimal dollars. The two submission paths intentionally
//! convert differently:
//!
//! - invoice creation truncates (`dollars_to_cents_trunc`)
//! - invoice update rounds half-away-from-zero (`dollars_to_cents_rounded`)
//!
//! This mirrors the behavior the dashboard has always had. Do not
//! unify the two without updating the regression tests below.

/// Convert a dollar amount to cents, truncating sub-cent fractions.
///
/// Used by the create path. `50.999` becomes `5099`.
pub fn dollars_to_cents_trunc(dollars: f64) -> i64 {
    (dollars * 100.0).trunc() as i64
}

/// Convert a dollar amount to cents, rounding to the nearest cent.
///
/// Used by the update path. `50.999` becomes `5100`.
pub fn dollars_to_cents_rounded(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Convert stored cents back to decimal dollars.
///
/// Plain division, no rounding. Exact for any integral number of cents.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format stored cents as a US dollar string, e.g. `$1,234.56`.
pub fn format_usd(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{frac:02}")
    } else {
        format!("${grouped}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_path_truncates() {
        assert_eq!(dollars_to_cents_trunc(50.0), 5000);
        assert_eq!(dollars_to_cents_trunc(50.999), 5099);
        assert_eq!(dollars_to_cents_trunc(0.019), 1);
    }

    #[test]
    fn update_path_rounds() {
        assert_eq!(dollars_to_cents_rounded(50.0), 5000);
        assert_eq!(dollars_to_cents_rounded(50.999), 5100);
        assert_eq!(dollars_to_cents_rounded(0.015), 2);
    }

    // Pins the create/update discrepancy: the same sub-cent input maps
    // to different stored values depending on the path.
    #[test]
    fn trunc_and_round_diverge_on_subcent_input() {
        let dollars = 19.995;
        assert_eq!(dollars_to_cents_trunc(dollars), 1999);
        assert_eq!(dollars_to_cents_rounded(dollars), 2000);
    }

    // Cent totals past i32::MAX must come through exact; the narrowing
    // to the storage column is the database's job, not this module's.
    #[test]
    fn large_amounts_keep_full_precision() {
        assert_eq!(dollars_to_cents_trunc(50_000_000.0), 5_000_000_000);
        assert_eq!(dollars_to_cents_rounded(50_000_000.0), 5_000_000_000);
    }

    #[test]
    fn round_trip_exact_for_integral_cents() {
        for cents in [0, 1, 99, 100, 5000, 123_456_789] {
            let dollars = cents_to_dollars(cents);
            assert_eq!(dollars_to_cents_trunc(dollars), cents);
            assert_eq!(dollars_to_cents_rounded(dollars), cents);
        }
    }

    #[test]
    fn formats_usd() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(5), "$0.05");
        assert_eq!(format_usd(5000), "$50.00");
        assert_eq!(format_usd(123_456), "$1,234.56");
        assert_eq!(format_usd(100_000_000), "$1,000,000.00");
        assert_eq!(format_usd(-123_456), "-$1,234.56");
    }
}
