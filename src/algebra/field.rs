use super::group::Group;
use super::ring::Ring;

/// Marker trait for fields.
///
/// A field is a ring whose [`Group::inv`] succeeds for every non-zero
/// element. Implementing this is a promise the library does not check:
/// integers mod a composite N implement it too, and then `inv` fails on
/// zero divisors instead of only on zero.
pub trait Field: Ring + Group {}

impl<O: Field + ?Sized> Field for &O {}
