use core::fmt;
use std::borrow::Cow;
use core::ops::{Index, IndexMut};
use std::collections::BTreeMap;

use tracing::debug;

use crate::algebra::field::Field;
use crate::algebra::group::Group;
use crate::algebra::ring::Ring;
use crate::algebra::semigroup::{Monoid, Semigroup};
use crate::algebra::element::Element;
use crate::error::{AlgebraError, Result};

/// A dense `rows × cols` grid stored row-major.
///
/// Indexing with `m[(row, col)]` panics out of bounds, like slice indexing;
/// [`DenseMatrix::get`] is the checked form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<E> {
    width: usize,
    height: usize,
    cells: Vec<E>,
}

impl<E> DenseMatrix<E> {
    /// Build from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the rows have
    /// different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use ringfold::DenseMatrix;
    ///
    /// let m = DenseMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    /// assert!(DenseMatrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                debug!(expected = width, found = row.len(), "ragged matrix rows");
                return Err(AlgebraError::DimensionMismatch {
                    left: (1, width),
                    right: (1, row.len()),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a `rows × cols` matrix from `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> E) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self {
            width: cols,
            height: rows,
            cells,
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(rows, cols)`.
    pub const fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut E> {
        if row < self.height && col < self.width {
            self.cells.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// Overwrite one cell. Panics out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: E) {
        self[(row, col)] = value;
    }

    /// The cells of one row. Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[E] {
        assert!(row < self.height, "row {} out of bounds for {} rows", row, self.height);
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[E]> + '_ {
        (0..self.height).map(move |r| self.row(r))
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.width {
            self.cells.swap(a * self.width + c, b * self.width + c);
        }
    }

    /// Apply `f` to every cell.
    pub fn map<F, T>(&self, f: F) -> DenseMatrix<T>
    where
        F: FnMut(&E) -> T,
    {
        DenseMatrix {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<E: Clone> DenseMatrix<E> {
    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: E) -> Self {
        Self {
            width: cols,
            height: rows,
            cells: vec![value; rows * cols],
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width, self.height, |r, c| self[(c, r)].clone())
    }
}

impl<E> Index<(usize, usize)> for DenseMatrix<E> {
    type Output = E;

    fn index(&self, (row, col): (usize, usize)) -> &E {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        &self.cells[row * self.width + col]
    }
}

impl<E> IndexMut<(usize, usize)> for DenseMatrix<E> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut E {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        &mut self.cells[row * self.width + col]
    }
}

/// Writes one cell through `cell`, one line per row, cells separated by a
/// single space.
fn write_grid(
    f: &mut fmt::Formatter<'_>,
    rows: usize,
    cols: usize,
    mut cell: impl FnMut(&mut fmt::Formatter<'_>, usize, usize) -> fmt::Result,
) -> fmt::Result {
    for r in 0..rows {
        if r > 0 {
            f.write_str("\n")?;
        }
        for c in 0..cols {
            if c > 0 {
                f.write_str(" ")?;
            }
            cell(f, r, c)?;
        }
    }
    Ok(())
}

impl<E: fmt::Display> fmt::Display for DenseMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.height, self.width, |f, r, c| {
            fmt::Display::fmt(&self[(r, c)], f)
        })
    }
}

impl<E: fmt::Debug> fmt::Debug for DenseMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for DenseMatrix<E> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for DenseMatrix<E> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<E>> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

/// A `rows × cols` grid storing only the cells that differ from a default.
///
/// # Example
///
/// ```
/// use ringfold::SparseMatrix;
///
/// let mut m = SparseMatrix::new(3, 3, 0);
/// m.set(0, 2, 7);
/// m.set(1, 1, 0);
/// assert_eq!(m.get(0, 2), Some(&7));
/// assert_eq!(m.get(2, 2), Some(&0));
/// assert_eq!(m.stored(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparseMatrix<E> {
    width: usize,
    height: usize,
    default: E,
    cells: BTreeMap<(usize, usize), E>,
}

impl<E> SparseMatrix<E> {
    /// A `rows × cols` matrix with every cell equal to `default`.
    pub fn new(rows: usize, cols: usize, default: E) -> Self {
        Self {
            width: cols,
            height: rows,
            default,
            cells: BTreeMap::new(),
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// The value of every cell not explicitly stored.
    pub fn default_value(&self) -> &E {
        &self.default
    }

    /// The cell at `(row, col)`, `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        if row < self.height && col < self.width {
            Some(self.cells.get(&(row, col)).unwrap_or(&self.default))
        } else {
            None
        }
    }

    /// Number of explicitly stored cells.
    pub fn stored(&self) -> usize {
        self.cells.len()
    }

    /// Stored cells as `((row, col), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &E)> + '_ {
        self.cells.iter().map(|(&pos, value)| (pos, value))
    }
}

impl<E: PartialEq> SparseMatrix<E> {
    /// Set one cell; setting it to the default drops it from storage.
    /// Panics out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: E) {
        assert!(
            row < self.height && col < self.width,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.height,
            self.width
        );
        if value == self.default {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }
}

impl<E: Clone> SparseMatrix<E> {
    pub fn to_dense(&self) -> DenseMatrix<E> {
        DenseMatrix::from_fn(self.height, self.width, |r, c| {
            self.cells.get(&(r, c)).unwrap_or(&self.default).clone()
        })
    }
}

impl<E: Clone + PartialEq> SparseMatrix<E> {
    /// Store the cells of `dense` that differ from `default`.
    pub fn from_dense(dense: &DenseMatrix<E>, default: E) -> Self {
        let mut sparse = Self::new(dense.height, dense.width, default);
        for r in 0..dense.height {
            for c in 0..dense.width {
                let value = &dense[(r, c)];
                if *value != sparse.default {
                    sparse.cells.insert((r, c), value.clone());
                }
            }
        }
        sparse
    }
}

impl<E: fmt::Display> fmt::Display for SparseMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.height, self.width, |f, r, c| {
            let value = self.cells.get(&(r, c)).unwrap_or(&self.default);
            fmt::Display::fmt(value, f)
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SparseRepr<E> {
    rows: usize,
    cols: usize,
    default: E,
    cells: Vec<(usize, usize, E)>,
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize + Clone> serde::Serialize for SparseMatrix<E> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = SparseRepr {
            rows: self.height,
            cols: self.width,
            default: self.default.clone(),
            cells: self
                .cells
                .iter()
                .map(|(&(r, c), v)| (r, c, v.clone()))
                .collect(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for SparseMatrix<E>
where
    E: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = <SparseRepr<E> as serde::Deserialize>::deserialize(deserializer)?;
        let mut m = Self::new(repr.rows, repr.cols, repr.default);
        for (r, c, v) in repr.cells {
            if r >= m.height || c >= m.width {
                return Err(serde::de::Error::custom(format_args!(
                    "cell ({}, {}) out of bounds for {}x{} matrix",
                    r, c, m.height, m.width
                )));
            }
            m.set(r, c, v);
        }
        Ok(m)
    }
}

/// Standard product of a `p × q` and a `q × r` matrix. Shapes are the
/// caller's responsibility.
fn product<R: Ring>(
    ring: &R,
    a: &DenseMatrix<R::Elem>,
    b: &DenseMatrix<R::Elem>,
) -> DenseMatrix<R::Elem> {
    DenseMatrix::from_fn(a.height, b.width, |i, j| {
        (0..a.width).fold(ring.zero(), |acc, k| {
            ring.plus(&acc, &ring.times(&a[(i, k)], &b[(k, j)]))
        })
    })
}

fn sum<R: Ring>(ring: &R, a: &DenseMatrix<R::Elem>, b: &DenseMatrix<R::Elem>) -> DenseMatrix<R::Elem> {
    assert_eq!(a.shape(), b.shape(), "matrix sum of unequal shapes");
    DenseMatrix {
        width: a.width,
        height: a.height,
        cells: a
            .cells
            .iter()
            .zip(&b.cells)
            .map(|(x, y)| ring.plus(x, y))
            .collect(),
    }
}

fn identity<R: Ring>(ring: &R, n: usize) -> DenseMatrix<R::Elem> {
    DenseMatrix::from_fn(n, n, |r, c| if r == c { ring.id() } else { ring.zero() })
}

/// Dense matrix arithmetic of any shape over an entry ring.
///
/// Not an operation table: products and sums of arbitrary shapes can fail,
/// so they return [`Result`]. For square matrices of one fixed size use
/// [`MatrixRing`].
///
/// # Example
///
/// ```
/// use ringfold::{DenseMatrix, Integers, MatrixOps};
///
/// let ops = MatrixOps::new(Integers::<i64>::new());
/// let a = DenseMatrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
/// let b = a.transpose();
/// assert_eq!(ops.times(&a, &b).unwrap()[(0, 0)], 14);
/// assert!(ops.times(&a, &a).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatrixOps<R> {
    entries: R,
}

impl<R> MatrixOps<R> {
    pub const fn new(entries: R) -> Self {
        Self { entries }
    }

    /// The entry ring.
    pub fn entries(&self) -> &R {
        &self.entries
    }
}

impl<R: Ring> MatrixOps<R> {
    /// The `rows × cols` zero matrix.
    pub fn zeros(&self, rows: usize, cols: usize) -> DenseMatrix<R::Elem> {
        DenseMatrix::filled(rows, cols, self.entries.zero())
    }

    /// The `n × n` identity matrix.
    pub fn identity(&self, n: usize) -> DenseMatrix<R::Elem> {
        identity(&self.entries, n)
    }

    /// Matrix product `a · b`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless `a.width() == b.height()`.
    pub fn times(
        &self,
        a: &DenseMatrix<R::Elem>,
        b: &DenseMatrix<R::Elem>,
    ) -> Result<DenseMatrix<R::Elem>> {
        if a.width != b.height {
            debug!(left = ?a.shape(), right = ?b.shape(), "matrix product shape mismatch");
            return Err(AlgebraError::DimensionMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(product(&self.entries, a, b))
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless the shapes are equal.
    pub fn plus(
        &self,
        a: &DenseMatrix<R::Elem>,
        b: &DenseMatrix<R::Elem>,
    ) -> Result<DenseMatrix<R::Elem>> {
        if a.shape() != b.shape() {
            debug!(left = ?a.shape(), right = ?b.shape(), "matrix sum shape mismatch");
            return Err(AlgebraError::DimensionMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(sum(&self.entries, a, b))
    }

    pub fn negate(&self, a: &DenseMatrix<R::Elem>) -> DenseMatrix<R::Elem> {
        a.map(|x| self.entries.negate(x))
    }

    /// Multiply every entry on the left by `c`.
    pub fn scalar(&self, c: &R::Elem, a: &DenseMatrix<R::Elem>) -> DenseMatrix<R::Elem> {
        a.map(|x| self.entries.times(c, x))
    }
}

/// The ring of `n × n` matrices over an entry ring, `n` fixed at
/// construction.
///
/// [`Semigroup::init`] resizes any raw matrix to `n × n`, dropping cells
/// outside and filling missing ones with zero, so every element is square
/// of the right size and products never fail. Raw operands of another shape
/// passed straight to the table methods are resized the same way.
/// [`MatrixRing::matrix`] is the strict alternative that rejects other
/// shapes.
///
/// When the entries form a [`Field`] this is also a [`Group`] on the
/// non-singular matrices, with inverses by Gauss-Jordan elimination.
///
/// # Example
///
/// ```
/// use ringfold::{Element, IntegerModN, MatrixRing};
///
/// let gl2 = MatrixRing::new(IntegerModN::<5>, 2);
/// let m = gl2.matrix(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let inv = m.inv().unwrap();
/// assert_eq!(inv.to_string(), "3 1\n4 2");
/// assert!((&m * &inv).is_id());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRing<R> {
    entries: R,
    n: usize,
}

impl<R> MatrixRing<R> {
    pub const fn new(entries: R, n: usize) -> Self {
        Self { entries, n }
    }

    /// The entry ring.
    pub fn entries(&self) -> &R {
        &self.entries
    }

    /// Side length of every matrix in the ring.
    pub const fn dimension(&self) -> usize {
        self.n
    }
}

impl<R: Ring> MatrixRing<R> {
    /// Bind an `n × n` list of rows to this ring.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for ragged rows or any
    /// shape other than `n × n`.
    pub fn matrix(&self, rows: Vec<Vec<R::Elem>>) -> Result<Element<'_, Self>> {
        let raw = DenseMatrix::from_rows(rows)?;
        if raw.shape() != (self.n, self.n) {
            debug!(shape = ?raw.shape(), n = self.n, "matrix does not fit the ring");
            return Err(AlgebraError::DimensionMismatch {
                left: raw.shape(),
                right: (self.n, self.n),
            });
        }
        Ok(Element::new(raw, self))
    }

    /// Borrow `a` when it is already `n × n`, otherwise resize it like
    /// [`Semigroup::init`].
    fn fit<'a>(&self, a: &'a DenseMatrix<R::Elem>) -> Cow<'a, DenseMatrix<R::Elem>> {
        if a.shape() == (self.n, self.n) {
            Cow::Borrowed(a)
        } else {
            debug!(shape = ?a.shape(), n = self.n, "resizing matrix operand");
            Cow::Owned(self.init(a.clone()))
        }
    }
}

impl<R: Ring> Semigroup for MatrixRing<R> {
    type Elem = DenseMatrix<R::Elem>;

    fn init(&self, raw: Self::Elem) -> Self::Elem {
        DenseMatrix::from_fn(self.n, self.n, |r, c| match raw.get(r, c) {
            Some(x) => self.entries.init(x.clone()),
            None => self.entries.zero(),
        })
    }

    fn times(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        product(&self.entries, &self.fit(a), &self.fit(b))
    }

    fn fmt_elem(&self, a: &Self::Elem, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, a.height, a.width, |f, r, c| {
            self.entries.fmt_elem(&a[(r, c)], f)
        })
    }
}

impl<R: Ring> Monoid for MatrixRing<R> {
    fn id(&self) -> Self::Elem {
        identity(&self.entries, self.n)
    }
}

impl<R: Ring> Ring for MatrixRing<R> {
    fn zero(&self) -> Self::Elem {
        DenseMatrix::filled(self.n, self.n, self.entries.zero())
    }

    fn negate(&self, a: &Self::Elem) -> Self::Elem {
        self.fit(a).map(|x| self.entries.negate(x))
    }

    fn plus(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        sum(&self.entries, &self.fit(a), &self.fit(b))
    }
}

impl<R: Field> Group for MatrixRing<R> {
    /// Gauss-Jordan elimination on `[a | I]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotInvertible`] when some column has no
    /// invertible entry on or below the diagonal, which over a field means
    /// the matrix is singular.
    fn inv(&self, a: &Self::Elem) -> Result<Self::Elem> {
        let ring = &self.entries;
        let n = self.n;
        let mut left = self.fit(a).into_owned();
        let mut right = self.id();

        for col in 0..n {
            // Over a composite modulus a nonzero entry need not be a unit.
            let pivot = match (col..n).find(|&r| ring.inv(&left[(r, col)]).is_ok()) {
                Some(row) => row,
                None => {
                    debug!(n, col, "singular matrix");
                    return Err(AlgebraError::not_invertible(self.render(a)));
                }
            };
            left.swap_rows(pivot, col);
            right.swap_rows(pivot, col);

            let scale = ring.inv(&left[(col, col)])?;
            for c in 0..n {
                left[(col, c)] = ring.times(&scale, &left[(col, c)]);
                right[(col, c)] = ring.times(&scale, &right[(col, c)]);
            }

            for r in (0..n).filter(|&r| r != col) {
                let factor = left[(r, col)].clone();
                if ring.is_zero(&factor) {
                    continue;
                }
                for c in 0..n {
                    let l = ring.times(&factor, &left[(col, c)]);
                    left[(r, c)] = ring.minus(&left[(r, c)], &l);
                    let rr = ring.times(&factor, &right[(col, c)]);
                    right[(r, c)] = ring.minus(&right[(r, c)], &rr);
                }
            }
        }
        Ok(right)
    }
}
