//! Elements bound to an operation table.
//!
//! [`Element`] pairs a raw value with a reference to the table that governs
//! it. Which operators exist depends on the tiers the table implements:
//! `*` needs [`Semigroup`], `+`, `-` need [`Ring`], `/` needs [`Group`].

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::group::Group;
use super::ring::Ring;
use super::semigroup::{Monoid, Semigroup};
use super::shared::Shared;
use crate::error::Result;

/// A raw value in canonical form, bound to the table `O`.
///
/// The table is borrowed, so it always outlives its elements. Bind to a
/// [`Shared`] instance to get `Element<'static, O>`.
///
/// # Example
///
/// ```
/// use ringfold::{Element, IntegerMod};
///
/// let z7 = IntegerMod::new(7);
/// let a = Element::new(10, &z7); // reduced to 3
/// let b = Element::new(5, &z7);
///
/// assert_eq!(*(a + b).value(), 1);
/// assert_eq!(*(a * b).value(), 1);
/// assert_eq!(*a.inv().unwrap().value(), 5);
/// ```
pub struct Element<'o, O: Semigroup> {
    value: O::Elem,
    ops: &'o O,
}

impl<'o, O: Semigroup> Element<'o, O> {
    /// Bind `raw` to `ops`, bringing it into canonical form first.
    pub fn new(raw: O::Elem, ops: &'o O) -> Self {
        Self {
            value: ops.init(raw),
            ops,
        }
    }

    /// The raw value, in canonical form.
    #[inline]
    pub fn value(&self) -> &O::Elem {
        &self.value
    }

    pub fn into_value(self) -> O::Elem {
        self.value
    }

    /// The table this element is bound to.
    #[inline]
    pub fn ops(&self) -> &'o O {
        self.ops
    }

    /// Bind another raw value to the same table.
    pub fn lift(&self, raw: O::Elem) -> Self {
        Self::new(raw, self.ops)
    }

    /// `self * raw`, canonicalizing `raw` first.
    pub fn times_raw(&self, raw: O::Elem) -> Self {
        let rhs = self.ops.init(raw);
        self.lift(self.ops.times(&self.value, &rhs))
    }

    fn assert_same_ops(&self, other: &Self) {
        assert!(
            core::ptr::eq(self.ops, other.ops) || self.ops == other.ops,
            "elements must be bound to the same operation table"
        );
    }

    fn times_ref(&self, rhs: &Self) -> Self {
        self.assert_same_ops(rhs);
        self.lift(self.ops.times(&self.value, &rhs.value))
    }
}

impl<O: Semigroup + Shared + 'static> Element<'static, O> {
    /// Bind `raw` to the process-wide shared instance of `O`.
    ///
    /// ```
    /// use ringfold::{Element, IntegerModN};
    ///
    /// let a = Element::<IntegerModN<11>>::of(2);
    /// assert_eq!(*a.inv().unwrap().value(), 6);
    /// ```
    pub fn of(raw: O::Elem) -> Self {
        Self::new(raw, O::shared())
    }
}

impl<'o, O: Monoid> Element<'o, O> {
    /// The identity of `ops`.
    pub fn id(ops: &'o O) -> Self {
        Self::new(ops.id(), ops)
    }

    pub fn is_id(&self) -> bool {
        self.ops.is_id(&self.value)
    }

    /// `self^n` by square-and-multiply. `pow(0)` is the identity.
    pub fn pow(&self, n: u64) -> Self {
        self.lift(self.ops.power(&self.value, n))
    }
}

impl<'o, O: Group> Element<'o, O> {
    /// Inverse under `*`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`](crate::AlgebraError::NotInvertible)
    /// if the element has no inverse in its table.
    pub fn inv(&self) -> Result<Self> {
        Ok(self.lift(self.ops.inv(&self.value)?))
    }

    /// `self^n` where `n` can be negative: `(self⁻¹)^|n|`.
    pub fn pow_signed(&self, n: i64) -> Result<Self> {
        Ok(self.lift(self.ops.power_signed(&self.value, n)?))
    }

    /// `self * rhs⁻¹`.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.assert_same_ops(rhs);
        Ok(self.lift(self.ops.divide(&self.value, &rhs.value)?))
    }
}

impl<'o, O: Ring> Element<'o, O> {
    /// The additive identity of `ops`.
    pub fn zero(ops: &'o O) -> Self {
        Self::new(ops.zero(), ops)
    }

    pub fn is_zero(&self) -> bool {
        self.ops.is_zero(&self.value)
    }

    /// `self + raw`, canonicalizing `raw` first.
    pub fn plus_raw(&self, raw: O::Elem) -> Self {
        let rhs = self.ops.init(raw);
        self.lift(self.ops.plus(&self.value, &rhs))
    }

    /// Integer multiple `n·self`.
    pub fn scale(&self, n: i64) -> Self {
        self.lift(self.ops.scale(&self.value, n))
    }

    fn plus_ref(&self, rhs: &Self) -> Self {
        self.assert_same_ops(rhs);
        self.lift(self.ops.plus(&self.value, &rhs.value))
    }

    fn minus_ref(&self, rhs: &Self) -> Self {
        self.assert_same_ops(rhs);
        self.lift(self.ops.minus(&self.value, &rhs.value))
    }
}

#[cfg(feature = "rand")]
impl<'o, O> Element<'o, O>
where
    O: Semigroup + rand::distributions::Distribution<<O as Semigroup>::Elem>,
{
    /// Sample a uniformly random element of `ops`.
    pub fn random<R: rand::Rng + ?Sized>(ops: &'o O, rng: &mut R) -> Self {
        Self::new(rand::distributions::Distribution::sample(ops, rng), ops)
    }
}

impl<O: Semigroup> Clone for Element<'_, O> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            ops: self.ops,
        }
    }
}

impl<O: Semigroup> Copy for Element<'_, O> where O::Elem: Copy {}

impl<O: Semigroup> PartialEq for Element<'_, O> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<O: Semigroup> Eq for Element<'_, O> where O::Elem: Eq {}

impl<O: Semigroup> Hash for Element<'_, O>
where
    O::Elem: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<O: Semigroup> fmt::Debug for Element<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl<O: Semigroup> fmt::Display for Element<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ops.fmt_elem(&self.value, f)
    }
}

/* ---- Semigroup operators ---- */

impl<'o, O: Semigroup> Mul for Element<'o, O> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times_ref(&rhs)
    }
}

impl<'o, O: Semigroup> Mul<&Element<'o, O>> for Element<'o, O> {
    type Output = Self;

    fn mul(self, rhs: &Element<'o, O>) -> Self::Output {
        self.times_ref(rhs)
    }
}

impl<'o, O: Semigroup> Mul for &Element<'o, O> {
    type Output = Element<'o, O>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times_ref(rhs)
    }
}

impl<'o, O: Semigroup> MulAssign for Element<'o, O> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.times_ref(&rhs);
    }
}

impl<'o, O: Semigroup> MulAssign<&Element<'o, O>> for Element<'o, O> {
    fn mul_assign(&mut self, rhs: &Element<'o, O>) {
        *self = self.times_ref(rhs);
    }
}

/* ---- Group operators ---- */

/// Division is fallible, so `/` yields a `Result`.
impl<'o, O: Group> Div for Element<'o, O> {
    type Output = Result<Self>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs)
    }
}

impl<'o, O: Group> Div for &Element<'o, O> {
    type Output = Result<Element<'o, O>>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
    }
}

/* ---- Ring operators ---- */

impl<'o, O: Ring> Add for Element<'o, O> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus_ref(&rhs)
    }
}

impl<'o, O: Ring> Add<&Element<'o, O>> for Element<'o, O> {
    type Output = Self;

    fn add(self, rhs: &Element<'o, O>) -> Self::Output {
        self.plus_ref(rhs)
    }
}

impl<'o, O: Ring> Add for &Element<'o, O> {
    type Output = Element<'o, O>;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus_ref(rhs)
    }
}

impl<'o, O: Ring> Sub for Element<'o, O> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus_ref(&rhs)
    }
}

impl<'o, O: Ring> Sub<&Element<'o, O>> for Element<'o, O> {
    type Output = Self;

    fn sub(self, rhs: &Element<'o, O>) -> Self::Output {
        self.minus_ref(rhs)
    }
}

impl<'o, O: Ring> Sub for &Element<'o, O> {
    type Output = Element<'o, O>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus_ref(rhs)
    }
}

impl<'o, O: Ring> Neg for Element<'o, O> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.lift(self.ops.negate(&self.value))
    }
}

impl<'o, O: Ring> Neg for &Element<'o, O> {
    type Output = Element<'o, O>;

    fn neg(self) -> Self::Output {
        self.lift(self.ops.negate(&self.value))
    }
}

impl<'o, O: Ring> AddAssign for Element<'o, O> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.plus_ref(&rhs);
    }
}

impl<'o, O: Ring> AddAssign<&Element<'o, O>> for Element<'o, O> {
    fn add_assign(&mut self, rhs: &Element<'o, O>) {
        *self = self.plus_ref(rhs);
    }
}

impl<'o, O: Ring> SubAssign for Element<'o, O> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.minus_ref(&rhs);
    }
}

impl<'o, O: Ring> SubAssign<&Element<'o, O>> for Element<'o, O> {
    fn sub_assign(&mut self, rhs: &Element<'o, O>) {
        *self = self.minus_ref(rhs);
    }
}

#[cfg(feature = "serde")]
impl<O: Semigroup> serde::Serialize for Element<'_, O>
where
    O::Elem: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, O> serde::Deserialize<'de> for Element<'static, O>
where
    O: Semigroup + Shared + 'static,
    O::Elem: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <O::Elem as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::of(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgebraError;
    use crate::structures::integer::Integers;
    use crate::structures::modn::{IntegerMod, IntegerModN};

    type Z11 = IntegerModN<11>;

    #[test]
    fn construction_canonicalizes() {
        let z5 = IntegerMod::new(5);
        assert_eq!(*Element::new(-1, &z5).value(), 4);
        assert_eq!(*Element::new(17, &z5).value(), 2);
        assert_eq!(*z5.element(5).value(), 0);
    }

    #[test]
    fn operators_delegate_to_table() {
        let z5 = IntegerMod::new(5);
        let a = Element::new(3, &z5);
        let b = Element::new(4, &z5);
        assert_eq!(*(a + b).value(), 2);
        assert_eq!(*(a - b).value(), 4);
        assert_eq!(*(a * b).value(), 2);
        assert_eq!(*(-a).value(), 2);
        assert_eq!(*(&a * &b).value(), 2);
    }

    #[test]
    fn raw_overloads_canonicalize() {
        let z5 = IntegerMod::new(5);
        let a = Element::new(3, &z5);
        assert_eq!(*a.plus_raw(9).value(), 2);
        assert_eq!(*a.times_raw(-1).value(), 2);
    }

    #[test]
    fn in_place_operators() {
        let z7 = IntegerMod::new(7);
        let mut a = Element::new(3, &z7);
        a += Element::new(5, &z7);
        assert_eq!(*a.value(), 1);
        a *= Element::new(6, &z7);
        assert_eq!(*a.value(), 6);
        a -= Element::new(6, &z7);
        assert!(a.is_zero());
    }

    #[test]
    fn identity_and_zero() {
        let z = Integers::<i64>::default();
        assert!(Element::id(&z).is_id());
        assert!(Element::zero(&z).is_zero());
        assert_eq!(*Element::id(&z).value(), 1);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let a = Element::<Z11>::of(3);
        let mut acc = Element::id(a.ops());
        for n in 0..15u64 {
            assert_eq!(a.pow(n), acc, "3^{} mod 11", n);
            acc *= a;
        }
    }

    #[test]
    fn negative_powers_use_the_inverse() {
        let a = Element::<Z11>::of(2);
        assert_eq!(a.pow_signed(-1).unwrap(), a.inv().unwrap());
        assert_eq!(a.pow_signed(-3).unwrap(), a.inv().unwrap().pow(3));
        assert_eq!(a.pow_signed(0).unwrap(), Element::id(a.ops()));
    }

    #[test]
    fn division() {
        let a = Element::<Z11>::of(3);
        let b = Element::<Z11>::of(2);
        let q = (a / b).unwrap();
        assert_eq!(q * b, a);
        let zero = Element::<Z11>::of(0);
        assert!(matches!(a / zero, Err(AlgebraError::NotInvertible { .. })));
    }

    #[test]
    fn scale_is_repeated_addition() {
        let z = Integers::<i64>::default();
        let a = Element::new(7, &z);
        assert_eq!(*a.scale(0).value(), 0);
        assert_eq!(*a.scale(5).value(), 35);
        assert_eq!(*a.scale(-3).value(), -21);
    }

    #[test]
    fn equality_and_hash_follow_raw_value() {
        use std::collections::HashSet;

        let z5a = IntegerMod::new(5);
        let z5b = IntegerMod::new(5);
        let set: HashSet<_> = (0..20).map(|i| Element::new(i, &z5a)).collect();
        assert_eq!(set.len(), 5);
        assert!(set.contains(&Element::new(3, &z5b)));
    }

    #[test]
    fn display_renders_raw_value() {
        let a = Element::<Z11>::of(14);
        assert_eq!(a.to_string(), "3");
        assert_eq!(format!("{:?}", a), "3");
    }

    #[test]
    #[should_panic(expected = "same operation table")]
    fn mixing_tables_panics() {
        let z3 = IntegerMod::new(3);
        let z5 = IntegerMod::new(5);
        let _ = Element::new(1, &z3) + Element::new(1, &z5);
    }
}
