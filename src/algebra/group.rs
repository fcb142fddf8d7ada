use super::semigroup::Monoid;
use crate::error::Result;

/// A monoid in which elements have inverses under [`Semigroup::times`].
///
/// Laws (you should test these for concrete types):
/// - inverse: `times(a, inv(a)) == times(inv(a), a) == id()`
///
/// `inv` is fallible because several tables only form a group on part of
/// their raw values (integers mod N on the units, matrices on the
/// non-singular ones). Asking for the inverse of anything else fails with
/// [`AlgebraError::NotInvertible`](crate::AlgebraError::NotInvertible).
///
/// [`Semigroup::times`]: super::semigroup::Semigroup::times
pub trait Group: Monoid {
    /// Inverse element `a⁻¹`.
    fn inv(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// `a · b⁻¹`.
    #[inline]
    fn divide(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem> {
        Ok(self.times(a, &self.inv(b)?))
    }

    /// `a^n` for any integer `n`; negative powers are `(a⁻¹)^|n|`.
    fn power_signed(&self, a: &Self::Elem, n: i64) -> Result<Self::Elem> {
        if n >= 0 {
            Ok(self.power(a, n as u64))
        } else {
            let inv = self.inv(a)?;
            Ok(self.power(&inv, n.unsigned_abs()))
        }
    }
}

impl<O: Group + ?Sized> Group for &O {
    #[inline]
    fn inv(&self, a: &Self::Elem) -> Result<Self::Elem> {
        (**self).inv(a)
    }
}
