//! Integers modulo N.
//!
//! Two tables with identical behavior: [`IntegerModN`] fixes the modulus at
//! compile time and is zero-sized (so it works as a shared instance), and
//! [`IntegerMod`] carries a modulus chosen at runtime.
//!
//! Raw values are `i64` in `[0, N)`. Products go through `i128`, so any
//! modulus up to `i64::MAX` is safe.
//!
//! Both tables implement [`Field`], but only a prime modulus actually gives a
//! field. For composite N, [`Group::inv`] fails on every residue sharing a
//! factor with N. Use [`IntegerMod::is_field`] to check explicitly.

use crate::algebra::field::Field;
use crate::algebra::group::Group;
use crate::algebra::ring::Ring;
use crate::algebra::semigroup::{Monoid, Semigroup};
use crate::error::{AlgebraError, Result};
use crate::utils::{extended_gcd, is_prime, modulo};

#[inline]
fn mul_mod(a: i64, b: i64, n: i64) -> i64 {
    ((a as i128 * b as i128).rem_euclid(n as i128)) as i64
}

#[inline]
fn add_mod(a: i64, b: i64, n: i64) -> i64 {
    ((a as i128 + b as i128).rem_euclid(n as i128)) as i64
}

/// Inverse of `a` mod `n` from Bezout coefficients: `g = x·a + y·n`.
fn inv_mod(a: i64, n: i64) -> Result<i64> {
    let (g, x, _) = extended_gcd(a, n);
    if g != 1 {
        tracing::debug!(value = a, modulus = n, gcd = g, "residue is not a unit");
        return Err(AlgebraError::not_invertible(a));
    }
    Ok(modulo(x, n))
}

/// Integers mod a compile-time modulus `N`.
///
/// # Example
///
/// ```
/// use ringfold::{Element, IntegerModN};
///
/// type Z11 = IntegerModN<11>;
///
/// let a = Element::<Z11>::of(3);
/// assert_eq!(*a.inv().unwrap().value(), 4);
/// assert_eq!(*(a * a.inv().unwrap()).value(), 1);
/// ```
///
/// A modulus below one fails to compile as soon as the table is used:
///
/// ```compile_fail
/// use ringfold::{IntegerModN, Semigroup};
///
/// let _ = IntegerModN::<0>.init(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegerModN<const N: i64>;

impl<const N: i64> IntegerModN<N> {
    const MODULUS: i64 = {
        assert!(N >= 1, "modulus must be positive");
        N
    };

    /// The modulus `N`.
    pub const fn modulus() -> i64 {
        Self::MODULUS
    }

    /// Whether this table is a field, i.e. `N` is prime.
    pub const fn is_field() -> bool {
        Self::MODULUS > 1 && is_prime(Self::MODULUS as u64)
    }
}

impl<const N: i64> Semigroup for IntegerModN<N> {
    type Elem = i64;

    #[inline]
    fn init(&self, raw: i64) -> i64 {
        modulo(raw, Self::MODULUS)
    }

    #[inline]
    fn times(&self, a: &i64, b: &i64) -> i64 {
        mul_mod(*a, *b, Self::MODULUS)
    }
}

impl<const N: i64> Monoid for IntegerModN<N> {
    #[inline]
    fn id(&self) -> i64 {
        // Z/1Z is the zero ring.
        modulo(1, Self::MODULUS)
    }
}

impl<const N: i64> Group for IntegerModN<N> {
    fn inv(&self, a: &i64) -> Result<i64> {
        inv_mod(*a, Self::MODULUS)
    }
}

impl<const N: i64> Ring for IntegerModN<N> {
    #[inline]
    fn zero(&self) -> i64 {
        0
    }

    #[inline]
    fn negate(&self, a: &i64) -> i64 {
        modulo(Self::MODULUS - *a, Self::MODULUS)
    }

    #[inline]
    fn plus(&self, a: &i64, b: &i64) -> i64 {
        add_mod(*a, *b, Self::MODULUS)
    }
}

impl<const N: i64> Field for IntegerModN<N> {}

#[cfg(feature = "rand")]
impl<const N: i64> rand::distributions::Distribution<i64> for IntegerModN<N> {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(0..Self::MODULUS)
    }
}

/// Integers mod a modulus chosen at runtime.
///
/// # Example
///
/// ```
/// use ringfold::{Element, IntegerMod};
///
/// let z4 = IntegerMod::new(4);
/// let two = Element::new(2, &z4);
/// assert!((two * two).is_zero());
/// assert!(two.inv().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerMod {
    n: i64,
}

impl IntegerMod {
    /// Create the table for integers mod `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 1`.
    pub fn new(n: i64) -> Self {
        assert!(n >= 1, "modulus must be positive, got {}", n);
        Self { n }
    }

    /// The modulus.
    pub const fn modulus(&self) -> i64 {
        self.n
    }

    /// Whether this table is a field, i.e. the modulus is prime.
    pub const fn is_field(&self) -> bool {
        self.n > 1 && is_prime(self.n as u64)
    }
}

impl Semigroup for IntegerMod {
    type Elem = i64;

    #[inline]
    fn init(&self, raw: i64) -> i64 {
        modulo(raw, self.n)
    }

    #[inline]
    fn times(&self, a: &i64, b: &i64) -> i64 {
        mul_mod(*a, *b, self.n)
    }
}

impl Monoid for IntegerMod {
    #[inline]
    fn id(&self) -> i64 {
        modulo(1, self.n)
    }
}

impl Group for IntegerMod {
    fn inv(&self, a: &i64) -> Result<i64> {
        inv_mod(*a, self.n)
    }
}

impl Ring for IntegerMod {
    #[inline]
    fn zero(&self) -> i64 {
        0
    }

    #[inline]
    fn negate(&self, a: &i64) -> i64 {
        modulo(self.n - *a, self.n)
    }

    #[inline]
    fn plus(&self, a: &i64, b: &i64) -> i64 {
        add_mod(*a, *b, self.n)
    }
}

impl Field for IntegerMod {}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<i64> for IntegerMod {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(0..self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::element::Element;

    type Z11 = IntegerModN<11>;

    #[test]
    fn init_reduces_into_range() {
        let z = IntegerMod::new(7);
        assert_eq!(z.init(7), 0);
        assert_eq!(z.init(-1), 6);
        assert_eq!(z.init(-15), 6);
        assert_eq!(z.init(100), 2);
        assert_eq!(Z11::default().init(-22), 0);
    }

    #[test]
    fn negate() {
        let z = IntegerMod::new(7);
        assert_eq!(z.negate(&0), 0);
        assert_eq!(z.negate(&1), 6);
        assert_eq!(z.negate(&6), 1);
    }

    #[test]
    fn inverses_mod_11() {
        let z = Z11::default();
        assert_eq!(z.inv(&1), Ok(1));
        assert_eq!(z.inv(&2), Ok(6));
        assert_eq!(z.inv(&3), Ok(4));
        assert_eq!(z.inv(&10), Ok(10));
    }

    #[test]
    fn every_unit_inverts_mod_prime() {
        let z = IntegerMod::new(101);
        for a in 1..101 {
            let inv = z.inv(&a).unwrap();
            assert_eq!(z.times(&a, &inv), 1, "a = {}", a);
        }
    }

    #[test]
    fn zero_divisors_are_not_invertible() {
        let z = IntegerMod::new(12);
        for a in [0, 2, 3, 4, 6, 8, 9, 10] {
            assert!(matches!(z.inv(&a), Err(AlgebraError::NotInvertible { .. })), "a = {}", a);
        }
        for a in [1, 5, 7, 11] {
            assert!(z.inv(&a).is_ok(), "a = {}", a);
        }
    }

    #[test]
    fn large_modulus_does_not_overflow() {
        let p = 9_223_372_036_854_775_783; // largest prime below 2^63
        let z = IntegerMod::new(p);
        let a = p - 1;
        assert_eq!(z.times(&a, &a), 1);
        assert_eq!(z.plus(&a, &a), p - 2);
    }

    #[test]
    fn fermat_little_theorem() {
        let a = Element::<IntegerModN<17>>::of(3);
        assert!(a.pow(16).is_id());
    }

    #[test]
    fn is_field() {
        assert!(IntegerMod::new(11).is_field());
        assert!(!IntegerMod::new(12).is_field());
        assert!(!IntegerMod::new(1).is_field());
        assert!(Z11::is_field());
        assert!(!IntegerModN::<4>::is_field());
    }

    #[test]
    fn trivial_ring() {
        let z = IntegerMod::new(1);
        assert_eq!(z.id(), 0);
        assert_eq!(z.id(), z.zero());
        assert_eq!(IntegerModN::<1>::modulus(), 1);
        assert_eq!(IntegerModN::<1>.id(), IntegerModN::<1>.zero());
        assert_eq!(IntegerModN::<1>.init(5), 0);
    }

    #[test]
    #[should_panic(expected = "modulus must be positive")]
    fn zero_modulus_rejected() {
        let _ = IntegerMod::new(0);
    }

    #[test]
    fn counting_mod_2() {
        let z2 = IntegerMod::new(2);
        let mut x = Element::id(&z2);
        let seen: Vec<i64> = (0..4)
            .map(|_| {
                x = x.plus_raw(1);
                *x.value()
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 0, 1]);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_elements_are_canonical() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use crate::algebra::shared::Shared;

        let mut rng = StdRng::seed_from_u64(7);
        let z = IntegerMod::new(13);
        for _ in 0..100 {
            let a = Element::random(&z, &mut rng);
            assert!((0..13).contains(a.value()));
            let b = Element::<Z11>::random(Z11::shared(), &mut rng);
            assert!((0..11).contains(b.value()));
        }
    }
}
