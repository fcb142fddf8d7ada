use core::fmt;

use crate::algebra::element::Element;

/// Operation table of a semigroup: a closed, associative binary operation
/// over the raw value type [`Semigroup::Elem`].
///
/// An implementation is a behavior table, not a value container: every
/// method is a pure function of its arguments and of the table's own fixed
/// parameters (a modulus, a matrix dimension, component tables).
///
/// Laws (you should test these for concrete types):
/// - associativity: `times(times(a, b), c) == times(a, times(b, c))`
pub trait Semigroup: PartialEq {
    /// Raw value type the table operates on.
    type Elem: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Bring a raw value into canonical form (e.g. reduce mod N).
    #[inline]
    fn init(&self, raw: Self::Elem) -> Self::Elem {
        raw
    }

    /// The semigroup operation, written multiplicatively.
    fn times(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Render a raw value. Composite tables override this to render their
    /// components through the component tables.
    fn fmt_elem(&self, a: &Self::Elem, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(a, f)
    }

    /// Adapter that renders `a` through [`Semigroup::fmt_elem`].
    fn render<'a>(&'a self, a: &'a Self::Elem) -> Rendered<'a, Self> {
        Rendered { ops: self, value: a }
    }

    /// Wrap a raw value into an element bound to this table.
    fn element(&self, raw: Self::Elem) -> Element<'_, Self>
    where
        Self: Sized,
    {
        Element::new(raw, self)
    }
}

/// A raw value paired with the table that renders it. See [`Semigroup::render`].
pub struct Rendered<'a, O: Semigroup + ?Sized> {
    ops: &'a O,
    value: &'a O::Elem,
}

impl<O: Semigroup + ?Sized> fmt::Display for Rendered<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ops.fmt_elem(self.value, f)
    }
}

/// A semigroup with a two-sided identity.
///
/// Laws:
/// - identity: `times(id(), a) == times(a, id()) == a`
pub trait Monoid: Semigroup {
    /// Identity element.
    fn id(&self) -> Self::Elem;

    #[inline]
    fn is_id(&self, a: &Self::Elem) -> bool {
        *a == self.id()
    }

    /// `a^n` by square-and-multiply; `n == 0` yields the identity.
    ///
    /// Time complexity: O(log n) calls to [`Semigroup::times`].
    fn power(&self, a: &Self::Elem, n: u64) -> Self::Elem {
        let mut result = self.id();
        let mut base = a.clone();
        let mut n = n;

        while n > 0 {
            if n % 2 == 1 {
                result = self.times(&result, &base);
                n -= 1;
            }
            if n > 0 {
                base = self.times(&base, &base);
            }
            n /= 2;
        }
        result
    }
}

impl<O: Semigroup + ?Sized> Semigroup for &O {
    type Elem = O::Elem;

    #[inline]
    fn init(&self, raw: Self::Elem) -> Self::Elem {
        (**self).init(raw)
    }

    #[inline]
    fn times(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        (**self).times(a, b)
    }

    fn fmt_elem(&self, a: &Self::Elem, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_elem(a, f)
    }
}

impl<O: Monoid + ?Sized> Monoid for &O {
    #[inline]
    fn id(&self) -> Self::Elem {
        (**self).id()
    }

    fn power(&self, a: &Self::Elem, n: u64) -> Self::Elem {
        (**self).power(a, n)
    }
}
