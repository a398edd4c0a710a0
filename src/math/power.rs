//! Integer powers of [`BigNat`] by square-and-multiply.

use super::bignat::BigNat;

/// Computes `base^exponent` exactly.
///
/// An exponent of zero or below yields one.
///
/// ```
/// use binocalc::math::{bignat::BigNat, power::power};
///
/// let p = power(&BigNat::from(3u32), 4);
/// assert_eq!(p.to_decimal_string(), "81");
/// ```
pub fn power(base: &BigNat, exponent: i64) -> BigNat {
    let mut result = BigNat::one();
    if exponent <= 0 {
        return result;
    }

    let mut base = base.clone();
    let mut exp = exponent as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.multiply(&base);
        }
        exp >>= 1;
        if exp > 0 {
            base = base.multiply(&base);
        }
    }

    result
}
