use std::collections::btree_map::{self, BTreeMap};
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Mul, MulAssign};

use crate::algebra::semigroup::{Monoid, Semigroup};

/// A product of generators with non-negative exponents, such as `a²bc`.
///
/// Stored as a generator → exponent map with no zero exponents, so two
/// monomials are equal iff they have the same exponents. Generators are kept
/// in their `Ord` order, which is also the rendering order.
///
/// # Example
///
/// ```
/// use ringfold::Monomial;
///
/// let m: Monomial<char> = "aab".chars().collect();
/// let n: Monomial<char> = "ba".chars().collect();
/// assert_eq!((m.clone() * n).to_string(), "a^3b^2");
/// assert_eq!(m.degree(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Monomial<T> {
    exponents: BTreeMap<T, u32>,
}

impl<T> Monomial<T> {
    /// The empty monomial `1`.
    pub const fn new() -> Self {
        Self {
            exponents: BTreeMap::new(),
        }
    }

    /// Whether this is the empty monomial.
    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Total degree: the sum of all exponents.
    pub fn degree(&self) -> u64 {
        self.exponents.values().map(|&e| u64::from(e)).sum()
    }

    /// Number of distinct generators.
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// `(generator, exponent)` pairs in generator order.
    pub fn iter(&self) -> btree_map::Iter<'_, T, u32> {
        self.exponents.iter()
    }
}

impl<T: Ord> Monomial<T> {
    /// Exponent of `generator`, zero if absent.
    pub fn exponent(&self, generator: &T) -> u32 {
        self.exponents.get(generator).copied().unwrap_or(0)
    }

    /// Multiply in one more factor of `generator`.
    pub fn insert(&mut self, generator: T) {
        self.insert_power(generator, 1);
    }

    /// Multiply in `generator^exp`. A zero exponent is a no-op.
    pub fn insert_power(&mut self, generator: T, exp: u32) {
        if exp == 0 {
            return;
        }
        *self.exponents.entry(generator).or_insert(0) += exp;
    }

    /// Builder form of [`Monomial::insert`].
    pub fn with(mut self, generator: T) -> Self {
        self.insert(generator);
        self
    }

    /// Builder form of [`Monomial::insert_power`].
    pub fn with_power(mut self, generator: T, exp: u32) -> Self {
        self.insert_power(generator, exp);
        self
    }
}

impl<T> Default for Monomial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Monomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut m = Self::new();
        for generator in iter {
            m.insert(generator);
        }
        m
    }
}

impl<T: Ord> FromIterator<(T, u32)> for Monomial<T> {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (generator, exp) in iter {
            m.insert_power(generator, exp);
        }
        m
    }
}

impl<T: Ord + Clone> MulAssign<&Monomial<T>> for Monomial<T> {
    fn mul_assign(&mut self, rhs: &Monomial<T>) {
        for (generator, &exp) in &rhs.exponents {
            self.insert_power(generator.clone(), exp);
        }
    }
}

impl<T: Ord + Clone> Mul for Monomial<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= &rhs;
        self
    }
}

impl<T: Ord + Clone> Mul<&Monomial<T>> for &Monomial<T> {
    type Output = Monomial<T>;

    fn mul(self, rhs: &Monomial<T>) -> Self::Output {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl<T: fmt::Display> fmt::Display for Monomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (generator, &exp) in &self.exponents {
            write!(f, "{}", generator)?;
            if exp > 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Monomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.exponents).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Monomial<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.exponents)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Monomial<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = <Vec<(T, u32)> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// The free commutative monoid of monomials over generators `T`.
///
/// Multiplication adds exponents; the identity is the empty monomial.
pub struct MonomialMonoid<T>(PhantomData<fn() -> T>);

impl<T> MonomialMonoid<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for MonomialMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MonomialMonoid<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> PartialEq for MonomialMonoid<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for MonomialMonoid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MonomialMonoid")
    }
}

impl<T> Semigroup for MonomialMonoid<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display,
{
    type Elem = Monomial<T>;

    fn times(&self, a: &Monomial<T>, b: &Monomial<T>) -> Monomial<T> {
        a * b
    }
}

impl<T> Monoid for MonomialMonoid<T>
where
    T: Ord + Clone + fmt::Debug + fmt::Display,
{
    fn id(&self) -> Monomial<T> {
        Monomial::new()
    }

    fn is_id(&self, a: &Monomial<T>) -> bool {
        a.is_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::trace::Trace;

    fn mono(s: &str) -> Monomial<char> {
        s.chars().collect()
    }

    #[test]
    fn insert_increments() {
        let mut m = Monomial::new();
        m.insert('a');
        m.insert('b');
        m.insert('a');
        assert_eq!(m.exponent(&'a'), 2);
        assert_eq!(m.exponent(&'b'), 1);
        assert_eq!(m.exponent(&'c'), 0);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(mono("aab"), mono("aba"));
        assert_eq!(mono("aab"), Monomial::new().with_power('b', 1).with_power('a', 2));
        assert_ne!(mono("aab"), mono("abb"));
    }

    #[test]
    fn zero_exponent_is_not_stored() {
        let m = Monomial::new().with_power('z', 0);
        assert!(m.is_one());
        assert_eq!(m, Monomial::new());
    }

    #[test]
    fn multiplication_sums_exponents() {
        let m = mono("aab") * mono("bc");
        assert_eq!(m, mono("aabbc"));
        assert_eq!(m.degree(), 5);
        assert_eq!(&mono("") * &mono("ab"), mono("ab"));
    }

    #[test]
    fn display() {
        assert_eq!(mono("aab").to_string(), "a^2b");
        assert_eq!(mono("cba").to_string(), "abc");
        assert_eq!(mono("").to_string(), "");
    }

    #[test]
    fn monoid_table() {
        let monoid = MonomialMonoid::<char>::new();
        let a = monoid.element(mono("ab"));
        assert_eq!(a.pow(3).to_string(), "a^3b^3");
        assert!(a.pow(0).is_id());
    }

    #[test]
    fn traces_as_generators() {
        let t1: Trace<char> = "babc".chars().collect();
        let t2: Trace<char> = "abcb".chars().collect();
        let m: Monomial<Trace<char>> = vec![t1, t2].into_iter().collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m.degree(), 2);
    }
}
