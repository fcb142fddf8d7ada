use core::fmt;
use std::collections::btree_map::{self, BTreeMap, Entry};

use crate::algebra::ring::Ring;
use crate::algebra::semigroup::{Monoid, Semigroup};

/// A sparse polynomial: a map from monomial to coefficient.
///
/// The raw value of a [`PolynomialRing`]. Values built through the ring are
/// kept in canonical form: no term has a zero coefficient, so the zero
/// polynomial is the empty map. Terms are ordered by the monomial's `Ord`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Polynomial<M, C> {
    terms: BTreeMap<M, C>,
}

impl<M, C> Polynomial<M, C> {
    /// The zero polynomial.
    pub const fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(monomial, coefficient)` pairs in monomial order.
    pub fn iter(&self) -> btree_map::Iter<'_, M, C> {
        self.terms.iter()
    }

    pub fn monomials(&self) -> btree_map::Keys<'_, M, C> {
        self.terms.keys()
    }
}

impl<M: Ord, C> Polynomial<M, C> {
    /// Coefficient of `monomial`, `None` when the term is absent (zero).
    pub fn coefficient(&self, monomial: &M) -> Option<&C> {
        self.terms.get(monomial)
    }
}

impl<M, C> Default for Polynomial<M, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, M, C> IntoIterator for &'a Polynomial<M, C> {
    type Item = (&'a M, &'a C);
    type IntoIter = btree_map::Iter<'a, M, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Renders every coefficient. Elements of a [`PolynomialRing`] render
/// through the ring instead, which drops unit coefficients.
impl<M: fmt::Display, C: fmt::Display> fmt::Display for Polynomial<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, (monomial, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}{}", coeff, monomial)?;
        }
        Ok(())
    }
}

impl<M: fmt::Debug, C: fmt::Debug> fmt::Debug for Polynomial<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.terms).finish()
    }
}

#[cfg(feature = "serde")]
impl<M: serde::Serialize, C: serde::Serialize> serde::Serialize for Polynomial<M, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.terms)
    }
}

/// Deserializes the raw term list as-is. Binding the result to a ring (for
/// example through [`Element::new`](crate::Element::new)) restores
/// canonical form.
#[cfg(feature = "serde")]
impl<'de, M, C> serde::Deserialize<'de> for Polynomial<M, C>
where
    M: serde::Deserialize<'de> + Ord,
    C: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = <Vec<(M, C)> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self {
            terms: pairs.into_iter().collect(),
        })
    }
}

/// The semigroup ring `R[S]`: polynomials with coefficients in the ring `R`
/// over monomials from the monoid `S`.
///
/// The component tables are held by value; pass `&R` / `&S` to borrow
/// tables owned elsewhere.
///
/// Addition merges terms and prunes zero coefficients. Multiplication is
/// the bilinear convolution over `S`, O(|a|·|b|) coefficient products.
///
/// # Example
///
/// ```
/// use ringfold::{Element, IntegerModN, Monomial, MonomialMonoid, PolynomialRing};
///
/// let ring = PolynomialRing::new(IntegerModN::<4>, MonomialMonoid::<char>::new());
/// let m = |s: &str| s.chars().collect::<Monomial<char>>();
///
/// let mut p = ring.term(5, m("aa"));
/// ring.insert_term(&mut p, 3, m("ab"));
/// ring.insert_term(&mut p, 2, m("b"));
///
/// let t = Element::new(p, &ring);
/// assert_eq!(t.to_string(), "3ab + a^2 + 2b");
/// assert_eq!((&t + &t).to_string(), "2ab + 2a^2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolynomialRing<R, S> {
    ring: R,
    monoid: S,
}

impl<R, S> PolynomialRing<R, S> {
    pub const fn new(ring: R, monoid: S) -> Self {
        Self { ring, monoid }
    }

    /// The coefficient ring.
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// The monomial monoid.
    pub fn monoid(&self) -> &S {
        &self.monoid
    }
}

impl<R, S> PolynomialRing<R, S>
where
    R: Ring,
    S: Monoid,
    S::Elem: Ord,
{
    /// Add `coeff · monomial` to `poly` in place.
    ///
    /// Both parts are canonicalized by their tables first. A zero
    /// coefficient is a no-op, and a term whose coefficient sums to zero is
    /// removed.
    pub fn insert_term(
        &self,
        poly: &mut Polynomial<S::Elem, R::Elem>,
        coeff: R::Elem,
        monomial: S::Elem,
    ) {
        let coeff = self.ring.init(coeff);
        let monomial = self.monoid.init(monomial);
        self.accumulate(&mut poly.terms, monomial, coeff);
    }

    /// The single-term polynomial `coeff · monomial`.
    pub fn term(&self, coeff: R::Elem, monomial: S::Elem) -> Polynomial<S::Elem, R::Elem> {
        let mut poly = Polynomial::new();
        self.insert_term(&mut poly, coeff, monomial);
        poly
    }

    /// `monomial` with unit coefficient.
    pub fn monomial(&self, monomial: S::Elem) -> Polynomial<S::Elem, R::Elem> {
        self.term(self.ring.id(), monomial)
    }

    /// `coeff` on the identity monomial.
    pub fn constant(&self, coeff: R::Elem) -> Polynomial<S::Elem, R::Elem> {
        self.term(coeff, self.monoid.id())
    }

    /// Sum of the given terms.
    pub fn from_terms<I>(&self, terms: I) -> Polynomial<S::Elem, R::Elem>
    where
        I: IntoIterator<Item = (R::Elem, S::Elem)>,
    {
        let mut poly = Polynomial::new();
        for (coeff, monomial) in terms {
            self.insert_term(&mut poly, coeff, monomial);
        }
        poly
    }

    fn accumulate(&self, terms: &mut BTreeMap<S::Elem, R::Elem>, monomial: S::Elem, coeff: R::Elem) {
        if self.ring.is_zero(&coeff) {
            return;
        }
        match terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = self.ring.plus(slot.get(), &coeff);
                if self.ring.is_zero(&sum) {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }
}

impl<R, S> Semigroup for PolynomialRing<R, S>
where
    R: Ring,
    S: Monoid,
    S::Elem: Ord,
{
    type Elem = Polynomial<S::Elem, R::Elem>;

    fn init(&self, raw: Self::Elem) -> Self::Elem {
        self.from_terms(raw.terms.into_iter().map(|(m, c)| (c, m)))
    }

    fn times(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let mut terms = BTreeMap::new();
        for (ma, ca) in &a.terms {
            for (mb, cb) in &b.terms {
                self.accumulate(&mut terms, self.monoid.times(ma, mb), self.ring.times(ca, cb));
            }
        }
        Polynomial { terms }
    }

    fn fmt_elem(&self, a: &Self::Elem, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if a.is_zero() {
            return self.ring.fmt_elem(&self.ring.zero(), f);
        }
        for (i, (monomial, coeff)) in a.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            // A unit coefficient is implied, except on the constant term.
            if !self.ring.is_id(coeff) || self.monoid.is_id(monomial) {
                self.ring.fmt_elem(coeff, f)?;
            }
            self.monoid.fmt_elem(monomial, f)?;
        }
        Ok(())
    }
}

impl<R, S> Monoid for PolynomialRing<R, S>
where
    R: Ring,
    S: Monoid,
    S::Elem: Ord,
{
    fn id(&self) -> Self::Elem {
        self.constant(self.ring.id())
    }
}

impl<R, S> Ring for PolynomialRing<R, S>
where
    R: Ring,
    S: Monoid,
    S::Elem: Ord,
{
    fn zero(&self) -> Self::Elem {
        Polynomial::new()
    }

    fn negate(&self, a: &Self::Elem) -> Self::Elem {
        Polynomial {
            terms: a
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), self.ring.negate(c)))
                .collect(),
        }
    }

    fn plus(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let mut terms = a.terms.clone();
        for (m, c) in &b.terms {
            self.accumulate(&mut terms, m.clone(), c.clone());
        }
        Polynomial { terms }
    }

    fn is_zero(&self, a: &Self::Elem) -> bool {
        a.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::element::Element;
    use crate::structures::integer::Integers;
    use crate::structures::modn::IntegerModN;
    use crate::structures::monomial::{Monomial, MonomialMonoid};
    use crate::structures::trace::Trace;
    use crate::structures::word::{Word, WordMonoid};

    type Z4Poly = PolynomialRing<IntegerModN<4>, MonomialMonoid<char>>;

    fn m(s: &str) -> Monomial<char> {
        s.chars().collect()
    }

    fn z4_ring() -> Z4Poly {
        PolynomialRing::new(IntegerModN::<4>, MonomialMonoid::new())
    }

    #[test]
    fn zero_coefficient_is_never_inserted() {
        let ring = z4_ring();
        let mut p = ring.term(1, m("a"));
        let before = p.clone();
        ring.insert_term(&mut p, 0, m("b"));
        ring.insert_term(&mut p, 8, m("c"));
        assert_eq!(p, before);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn cancelling_terms_are_pruned() {
        let ring = z4_ring();
        let mut p = ring.term(1, m("ab"));
        ring.insert_term(&mut p, 3, m("ba"));
        assert!(p.is_zero());

        let a = Element::new(ring.term(3, m("a")), &ring);
        let b = Element::new(ring.term(1, m("a")), &ring);
        assert!((a + b).is_zero());
    }

    #[test]
    fn coefficients_are_reduced() {
        let ring = z4_ring();
        let p = ring.term(5, m("aa"));
        assert_eq!(p.coefficient(&m("aa")), Some(&1));
        assert_eq!(p.coefficient(&m("a")), None);
    }

    #[test]
    fn semigroup_ring_over_z4() {
        let ring = z4_ring();
        let t = Element::new(
            ring.from_terms([(5, m("aa")), (3, m("ab")), (2, m("b"))]),
            &ring,
        );
        assert_eq!(t.to_string(), "3ab + a^2 + 2b");
        assert_eq!((&t * &t).to_string(), "a^2b^2 + 2a^3b + a^4");
        assert_eq!((&t + &t).to_string(), "2ab + 2a^2");
    }

    #[test]
    fn identity_and_zero() {
        let ring = z4_ring();
        let t = Element::new(ring.from_terms([(3, m("ab")), (2, m(""))]), &ring);
        assert_eq!(&t * &Element::id(&ring), t);
        assert_eq!(&t + &Element::zero(&ring), t);
        assert!((&t - &t).is_zero());
        assert_eq!(Element::id(&ring).to_string(), "1");
        assert_eq!(Element::zero(&ring).to_string(), "0");
    }

    #[test]
    fn constant_term_keeps_unit_coefficient() {
        let ring = z4_ring();
        let p = Element::new(ring.from_terms([(1, m("")), (1, m("b"))]), &ring);
        assert_eq!(p.to_string(), "1 + b");
    }

    #[test]
    fn traces_as_generators() {
        let ring = PolynomialRing::new(IntegerModN::<4>, MonomialMonoid::<Trace<char>>::new());
        let tr = |s: &str| s.chars().collect::<Trace<char>>();

        let x = Monomial::new().with(tr("babc")).with(tr("bc"));
        let y = Monomial::new().with(tr("abcb")).with(tr("cb"));
        let z = Monomial::new().with(tr("abcb")).with(tr("cb")).with(tr("bc"));
        let p = ring.from_terms([(5, x.clone()), (2, y), (2, z.clone())]);

        assert_eq!(p.len(), 2);
        assert_eq!(p.coefficient(&x), Some(&3));
        assert_eq!(p.coefficient(&z), Some(&2));
    }

    #[test]
    fn non_commutative_monomials() {
        let ring = PolynomialRing::new(Integers::<i64>::new(), WordMonoid::<char>::new());
        let w = |s: &str| s.chars().collect::<Word<char>>();
        let a = Element::new(ring.monomial(w("a")), &ring);
        let b = Element::new(ring.monomial(w("b")), &ring);

        let commutator = &(&a * &b) - &(&b * &a);
        assert_eq!(commutator.value().len(), 2);
        assert_eq!(commutator.value().coefficient(&w("ab")), Some(&1));
        assert_eq!(commutator.value().coefficient(&w("ba")), Some(&-1));
    }

    #[test]
    fn borrowed_component_tables() {
        let coeffs = IntegerModN::<4>;
        let monos = MonomialMonoid::<char>::new();
        let ring = PolynomialRing::new(&coeffs, &monos);
        let p = Element::new(ring.term(2, m("a")), &ring);
        assert!((&p + &p).is_zero());
    }
}
