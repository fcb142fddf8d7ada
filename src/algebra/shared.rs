//! Process-wide shared operation tables.
//!
//! Rust has no generic statics, so the shared instances live in one
//! registry keyed by `TypeId`. The first request for a type constructs its
//! instance under the registry's write lock; every later request only takes
//! the read lock. Instances are never dropped, which is free for the
//! zero-sized tables this is meant for.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

type Registry = RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Operation tables with a lazily constructed process-wide instance.
///
/// Blanket-implemented for every `Default + Send + Sync` table. Using the
/// shared instance is optional: elements can always be bound to a table
/// the caller owns.
///
/// # Example
///
/// ```
/// use ringfold::{IntegerModN, Shared};
///
/// let a = IntegerModN::<7>::shared();
/// let b = IntegerModN::<7>::shared();
/// assert!(core::ptr::eq(a, b));
/// ```
pub trait Shared: Sized {
    fn shared() -> &'static Self;
}

impl<O: Default + Send + Sync + 'static> Shared for O {
    fn shared() -> &'static Self {
        let key = TypeId::of::<O>();

        let existing = registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();

        let entry = match existing {
            Some(entry) => entry,
            None => {
                let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
                *map.entry(key).or_insert_with(|| {
                    tracing::debug!(
                        ops = core::any::type_name::<O>(),
                        "constructing shared operation table"
                    );
                    Box::leak(Box::new(O::default()))
                })
            }
        };

        match entry.downcast_ref::<O>() {
            Some(ops) => ops,
            None => unreachable!("shared registry entries are keyed by their own TypeId"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::integer::Integers;
    use crate::structures::modn::IntegerModN;

    #[test]
    fn same_instance_per_type() {
        let a = IntegerModN::<5>::shared();
        let b = IntegerModN::<5>::shared();
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn distinct_types_get_distinct_entries() {
        let a: &IntegerModN<5> = Shared::shared();
        let b: &Integers<i32> = Shared::shared();
        assert_eq!(*a, IntegerModN::<5>);
        assert_eq!(*b, Integers::<i32>::default());
    }

    #[test]
    fn concurrent_first_use_yields_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| IntegerModN::<1009>::shared() as *const _ as usize))
            .collect();
        let addrs: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
