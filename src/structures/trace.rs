use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::structures::word::Word;

/// A word up to cyclic rotation.
///
/// Two traces are equal iff one is a rotation of the other. Equality tries
/// every rotation, so comparing traces of length n costs O(n²).
///
/// Hashing and ordering go through the lexicographically least rotation
/// (also O(n²) to find). That is rotation invariant and, unlike hashing the
/// sorted symbols, does not make anagrams such as `abab` and `aabb` collide.
///
/// # Example
///
/// ```
/// use ringfold::Trace;
///
/// let t: Trace<char> = "aba".chars().collect();
/// let u: Trace<char> = "baa".chars().collect();
/// assert_eq!(t, u);
/// assert_eq!(t.to_string(), "tr(aba)");
/// ```
#[derive(Clone)]
pub struct Trace<T> {
    word: Word<T>,
}

impl<T> Trace<T> {
    pub const fn new() -> Self {
        Self { word: Word::new() }
    }

    /// Append a symbol.
    pub fn push(&mut self, symbol: T) {
        self.word.push(symbol);
    }

    /// Append a symbol, builder style.
    pub fn with(mut self, symbol: T) -> Self {
        self.push(symbol);
        self
    }

    /// The representative word this trace was built from.
    pub fn word(&self) -> &Word<T> {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Symbols of the rotation starting at `start`.
    fn rotation(&self, start: usize) -> impl Iterator<Item = &T> + '_ {
        let symbols = self.word.symbols();
        symbols[start..].iter().chain(&symbols[..start])
    }
}

impl<T: Ord> Trace<T> {
    fn least_rotation_start(&self) -> usize {
        (1..self.len()).fold(0, |best, start| {
            if self.rotation(start).cmp(self.rotation(best)) == Ordering::Less {
                start
            } else {
                best
            }
        })
    }
}

impl<T: Ord + Clone> Trace<T> {
    /// The lexicographically least rotation, a canonical representative.
    pub fn canonical(&self) -> Word<T> {
        if self.is_empty() {
            return Word::new();
        }
        self.rotation(self.least_rotation_start()).cloned().collect()
    }
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Word<T>> for Trace<T> {
    fn from(word: Word<T>) -> Self {
        Self { word }
    }
}

impl<T> From<Vec<T>> for Trace<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self {
            word: Word::from(symbols),
        }
    }
}

impl<T> FromIterator<T> for Trace<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            word: iter.into_iter().collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for Trace<T> {
    fn eq(&self, other: &Self) -> bool {
        let n = self.len();
        if n != other.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|start| self.word.iter().eq(other.rotation(start)))
    }
}

impl<T: Eq> Eq for Trace<T> {}

impl<T: Ord + Hash> Hash for Trace<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        if self.is_empty() {
            return;
        }
        for symbol in self.rotation(self.least_rotation_start()) {
            symbol.hash(state);
        }
    }
}

impl<T: Ord> PartialOrd for Trace<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Trace<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_empty() || other.is_empty() {
            return self.len().cmp(&other.len());
        }
        self.rotation(self.least_rotation_start())
            .cmp(other.rotation(other.least_rotation_start()))
    }
}

impl<T: fmt::Display> fmt::Display for Trace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tr({})", self.word)
    }
}

impl<T: fmt::Debug> fmt::Debug for Trace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tr({:?})", self.word)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Trace<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.word, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Trace<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Word<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
