//! Composable algebraic structures.
//!
//! A structure is an operation table (semigroup, monoid, group, ring or
//! field) over a raw value type. [`Element`] binds a raw value to a table
//! and turns the table's operations into operators. Composite tables such
//! as [`PolynomialRing`] and [`MatrixRing`] are built from component tables.
//!
//! ```
//! use ringfold::{Element, IntegerModN, MatrixRing};
//!
//! let z7 = IntegerModN::<7>;
//! let a = Element::new(3, &z7);
//! assert_eq!(*a.inv().unwrap().value(), 5);
//!
//! let m2 = MatrixRing::new(z7, 2);
//! let m = m2.matrix(vec![vec![1, 1], vec![0, 1]]).unwrap();
//! assert_eq!(m.pow(7), Element::id(&m2));
//! ```

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::element::Element;
pub use algebra::field::Field;
pub use algebra::group::Group;
pub use algebra::ring::Ring;
pub use algebra::semigroup::{Monoid, Rendered, Semigroup};
pub use algebra::shared::Shared;

pub use error::{AlgebraError, Result};

pub use structures::crt::chinese_remainder;
pub use structures::integer::{Integer, Integers};
pub use structures::matrix::{DenseMatrix, MatrixOps, MatrixRing, SparseMatrix};
pub use structures::modn::{IntegerMod, IntegerModN};
pub use structures::monomial::{Monomial, MonomialMonoid};
pub use structures::poly::{Polynomial, PolynomialRing};
pub use structures::rational::{Rational, Rationals};
pub use structures::trace::Trace;
pub use structures::word::{Word, WordMonoid};
pub use utils::{extended_gcd, gcd, is_prime, modulo};
