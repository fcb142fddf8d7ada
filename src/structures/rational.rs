use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::group::Group;
use crate::algebra::ring::Ring;
use crate::algebra::semigroup::{Monoid, Semigroup};
use crate::error::{AlgebraError, Result};

/// A rational number in lowest terms with a positive denominator.
///
/// Intermediate products are computed in `i128` and reduced before being
/// narrowed back to `i64`; a reduced value that still does not fit panics,
/// like any other integer overflow.
///
/// # Example
///
/// ```
/// use ringfold::Rational;
///
/// let a = Rational::new(2, 4).unwrap();
/// assert_eq!(a, Rational::new(1, 2).unwrap());
/// assert_eq!(a.to_string(), "1/2");
///
/// let b = Rational::new(-1, 2).unwrap() + Rational::new(1, -3).unwrap();
/// assert_eq!(b.to_string(), "-5/6");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Create `num / den` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `den == 0`.
    pub fn new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            tracing::debug!(num, "rational with zero denominator");
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::reduce(num as i128, den as i128))
    }

    /// The integer `n` as a rational.
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Always positive.
    pub const fn denom(&self) -> i64 {
        self.den
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.den, self.num)
    }

    /// Reduce `num / den` (with `den != 0`) and fix the sign onto the numerator.
    fn reduce(num: i128, den: i128) -> Self {
        let g = gcd_i128(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self {
            num: narrow(num),
            den: narrow(den),
        }
    }
}

fn gcd_i128(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i128
}

fn narrow(v: i128) -> i64 {
    match i64::try_from(v) {
        Ok(v) => v,
        Err(_) => panic!("rational arithmetic overflow: {} does not fit in i64", v),
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let num = self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::reduce(num, den)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: narrow(-(self.num as i128)),
            den: self.den,
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (self.num as i128 * other.den as i128).cmp(&(other.num as i128 * self.den as i128))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.num, self.den), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (num, den) = <(i64, i64) as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(num, den).map_err(serde::de::Error::custom)
    }
}

/// The field of rational numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rationals;

impl Semigroup for Rationals {
    type Elem = Rational;

    #[inline]
    fn times(&self, a: &Rational, b: &Rational) -> Rational {
        *a * *b
    }
}

impl Monoid for Rationals {
    #[inline]
    fn id(&self) -> Rational {
        Rational::ONE
    }
}

impl Group for Rationals {
    fn inv(&self, a: &Rational) -> Result<Rational> {
        a.recip()
    }
}

impl Ring for Rationals {
    #[inline]
    fn zero(&self) -> Rational {
        Rational::ZERO
    }

    #[inline]
    fn negate(&self, a: &Rational) -> Rational {
        -*a
    }

    #[inline]
    fn plus(&self, a: &Rational, b: &Rational) -> Rational {
        *a + *b
    }
}

impl Field for Rationals {}

/// Samples numerators in `[-1000, 1000]` and denominators in `[1, 1000]`.
#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Rational> for Rationals {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Rational {
        let num = rng.gen_range(-1000..=1000);
        let den = rng.gen_range(1..=1000);
        Rational::reduce(num, den)
    }
}
