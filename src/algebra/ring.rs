use super::semigroup::Monoid;

/// A (not-necessarily commutative) ring.
///
/// This trait assumes:
/// - the raw values under `plus` form an abelian group with identity `zero()`
/// - the raw values under `times` form a monoid with identity `id()`
/// - multiplication distributes over addition.
pub trait Ring: Monoid {
    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Additive inverse `-a`.
    fn negate(&self, a: &Self::Elem) -> Self::Elem;

    /// Ring addition.
    fn plus(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    #[inline]
    fn minus(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.plus(a, &self.negate(b))
    }

    #[inline]
    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }

    /// Integer multiple `n·a` by double-and-add.
    fn scale(&self, a: &Self::Elem, n: i64) -> Self::Elem {
        let mut result = self.zero();
        let mut base = if n < 0 { self.negate(a) } else { a.clone() };
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = self.plus(&result, &base);
            }
            k >>= 1;
            if k > 0 {
                base = self.plus(&base, &base);
            }
        }
        result
    }
}

impl<O: Ring + ?Sized> Ring for &O {
    #[inline]
    fn zero(&self) -> Self::Elem {
        (**self).zero()
    }

    #[inline]
    fn negate(&self, a: &Self::Elem) -> Self::Elem {
        (**self).negate(a)
    }

    #[inline]
    fn plus(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        (**self).plus(a, b)
    }
}
