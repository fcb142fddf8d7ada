use core::fmt;
use core::marker::PhantomData;

use crate::algebra::semigroup::{Monoid, Semigroup};

/// An ordered, append-only sequence of symbols.
///
/// Equality is positional. Renders as the concatenation of its symbols.
///
/// # Example
///
/// ```
/// use ringfold::Word;
///
/// let w = Word::from(vec!['a', 'b']).with('a');
/// assert_eq!(w.len(), 3);
/// assert_eq!(w.to_string(), "aba");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<T> {
    symbols: Vec<T>,
}

impl<T> Word<T> {
    /// The empty word.
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol.
    pub fn push(&mut self, symbol: T) {
        self.symbols.push(symbol);
    }

    /// Append a symbol, builder style.
    pub fn with(mut self, symbol: T) -> Self {
        self.push(symbol);
        self
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.symbols.iter()
    }
}

impl<T: Clone> Word<T> {
    /// `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut symbols = Vec::with_capacity(self.len() + other.len());
        symbols.extend_from_slice(&self.symbols);
        symbols.extend_from_slice(&other.symbols);
        Self { symbols }
    }
}

impl<T> Default for Word<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Word<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self { symbols }
    }
}

impl<T> FromIterator<T> for Word<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Word<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.symbols.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Word<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Word<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Word<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.symbols).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Word<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.symbols, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Word<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// The free monoid over `T`: words under concatenation.
pub struct WordMonoid<T>(PhantomData<fn() -> T>);

impl<T> WordMonoid<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for WordMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for WordMonoid<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for WordMonoid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WordMonoid")
    }
}

impl<T> Semigroup for WordMonoid<T>
where
    T: Clone + PartialEq + fmt::Debug + fmt::Display,
{
    type Elem = Word<T>;

    fn times(&self, a: &Word<T>, b: &Word<T>) -> Word<T> {
        a.concat(b)
    }
}

impl<T> Monoid for WordMonoid<T>
where
    T: Clone + PartialEq + fmt::Debug + fmt::Display,
{
    fn id(&self) -> Word<T> {
        Word::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::element::Element;

    #[test]
    fn positional_equality() {
        let a: Word<char> = "aba".chars().collect();
        let b: Word<char> = "aba".chars().collect();
        let c: Word<char> = "baa".chars().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Word::from(vec!['a', 'b']));
    }

    #[test]
    fn append_only_growth() {
        let mut w = Word::new();
        assert!(w.is_empty());
        w.push(1);
        w.extend([2, 3]);
        assert_eq!(w.symbols(), &[1, 2, 3]);
        assert_eq!(w.iter().sum::<i32>(), 6);
    }

    #[test]
    fn free_monoid_concatenates() {
        let words = WordMonoid::<char>::new();
        let ab = Element::new("ab".chars().collect(), &words);
        let c = Element::new(Word::new().with('c'), &words);
        assert_eq!((&ab * &c).to_string(), "abc");
        assert_eq!((&c * &ab).to_string(), "cab");
        assert_eq!(ab.pow(3).to_string(), "ababab");
        assert!(ab.pow(0).is_id());
    }
}
