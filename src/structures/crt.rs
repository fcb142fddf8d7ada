use tracing::debug;

use crate::algebra::element::Element;
use crate::error::{AlgebraError, Result};
use crate::structures::modn::IntegerMod;
use crate::utils::extended_gcd;

/// Solve a system of congruences `x ≡ rᵢ (mod nᵢ)` with pairwise coprime
/// moduli.
///
/// Takes `(residue, modulus)` pairs and returns `(x, N)` where `N` is the
/// product of the moduli and `0 <= x < N`. Each congruence is lifted with
/// the Bezout coefficient of `nᵢ` against the product of the other moduli.
/// An empty system gives `(0, 1)`.
///
/// # Errors
///
/// Returns [`AlgebraError::NotInvertible`] if two moduli share a factor.
///
/// # Panics
///
/// Panics if a modulus is not positive or the product of the moduli
/// overflows `i64`.
///
/// # Example
///
/// ```
/// use ringfold::chinese_remainder;
///
/// let (x, n) = chinese_remainder(&[(2, 3), (3, 4), (1, 5)]).unwrap();
/// assert_eq!((x, n), (11, 60));
/// ```
pub fn chinese_remainder(congruences: &[(i64, i64)]) -> Result<(i64, i64)> {
    let total = congruences.iter().fold(1i64, |acc, &(_, n)| {
        assert!(n >= 1, "modulus must be positive, got {}", n);
        match acc.checked_mul(n) {
            Some(p) => p,
            None => panic!("product of moduli overflows i64"),
        }
    });

    let ring = IntegerMod::new(total);
    let mut x = Element::zero(&ring);
    for &(residue, n) in congruences {
        let others = total / n;
        let (g, _, y) = extended_gcd(n, others);
        if g != 1 {
            debug!(modulus = n, others, gcd = g, "moduli are not coprime");
            return Err(AlgebraError::not_invertible(format_args!(
                "{} (mod {})",
                others, n
            )));
        }
        // y·others ≡ 1 (mod n) and ≡ 0 modulo every other modulus.
        let lift = Element::new(y, &ring).times_raw(others);
        x += lift.times_raw(residue);
    }
    Ok((x.into_value(), total))
}
