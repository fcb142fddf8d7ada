//! The algebraic tiers and the element wrapper bound to them.
//!
//! Semigroup → Monoid → Group / Ring → Field. Each tier is a trait over an
//! operation table; [`Element`] exposes the operators a table supports.

pub mod element;
pub mod field;
pub mod group;
pub mod ring;
pub mod semigroup;
pub mod shared;

pub use element::Element;
pub use field::Field;
pub use group::Group;
pub use ring::Ring;
pub use semigroup::{Monoid, Semigroup};
pub use shared::Shared;
