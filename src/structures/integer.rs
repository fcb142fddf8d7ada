use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg};

use crate::algebra::ring::Ring;
use crate::algebra::semigroup::{Monoid, Semigroup};

/// The ring of integers over a primitive signed type.
///
/// Plain machine arithmetic: no inverses, no overflow handling.
///
/// # Example
///
/// ```
/// use ringfold::{Element, Integers};
///
/// let zz = Integers::<i64>::default();
/// let a = Element::new(6, &zz);
/// let b = Element::new(-4, &zz);
/// assert_eq!(*(a * b + a).value(), -18);
/// ```
pub struct Integers<T = i64>(PhantomData<fn() -> T>);

impl<T> Integers<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Integers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Integers<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Integers<T> {}

impl<T> PartialEq for Integers<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for Integers<T> {}

impl<T> fmt::Debug for Integers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integers<{}>", core::any::type_name::<T>())
    }
}

/// Bounds shared by the primitive signed integers.
pub trait Integer:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + From<i8>
    + Add<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Integer for T where
    T: Copy
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + From<i8>
        + Add<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

impl<T: Integer> Semigroup for Integers<T> {
    type Elem = T;

    #[inline]
    fn times(&self, a: &T, b: &T) -> T {
        *a * *b
    }
}

impl<T: Integer> Monoid for Integers<T> {
    #[inline]
    fn id(&self) -> T {
        T::from(1)
    }
}

impl<T: Integer> Ring for Integers<T> {
    #[inline]
    fn zero(&self) -> T {
        T::from(0)
    }

    #[inline]
    fn negate(&self, a: &T) -> T {
        -*a
    }

    #[inline]
    fn plus(&self, a: &T, b: &T) -> T {
        *a + *b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_operations() {
        let zz = Integers::<i32>::new();
        assert_eq!(zz.plus(&3, &-5), -2);
        assert_eq!(zz.times(&3, &-5), -15);
        assert_eq!(zz.negate(&3), -3);
        assert_eq!(zz.minus(&3, &5), -2);
        assert_eq!(zz.id(), 1);
        assert_eq!(zz.zero(), 0);
    }

    #[test]
    fn power_and_scale() {
        let zz = Integers::<i128>::new();
        assert_eq!(zz.power(&2, 0), 1);
        assert_eq!(zz.power(&2, 10), 1024);
        assert_eq!(zz.power(&-3, 3), -27);
        assert_eq!(zz.scale(&4, 7), 28);
        assert_eq!(zz.scale(&4, -7), -28);
    }

    #[test]
    fn debug_names_the_carrier() {
        assert_eq!(format!("{:?}", Integers::<i16>::new()), "Integers<i16>");
    }
}
