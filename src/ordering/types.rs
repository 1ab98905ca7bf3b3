//! Method-call surface for the ordering.

use super::engine::{order_by_priority, Ordered};
use crate::error::OrderError;
use std::hash::Hash;

/// Adds [`order_by_priority`] as a method on anything that can be turned
/// into an iterator: arrays, slices, `Vec`s, adapters.
///
/// The blanket implementation delegates to the free function; semantics and
/// errors are identical.
///
/// # Examples
///
/// ```
/// use priority_order::ordering::OrderByPriorityExt;
///
/// let codes = vec![3430003, 0, 345230001, -10002];
/// let ordered = codes
///     .order_by_priority(|c| *c, [345230001, -10002, 3430003])
///     .unwrap();
/// assert_eq!(ordered.as_slice(), &[345230001, -10002, 3430003, 0]);
/// ```
pub trait OrderByPriorityExt: IntoIterator + Sized {
    /// Orders this sequence by the position of each item's key in
    /// `priorities`.
    ///
    /// See [`order_by_priority`] for the full contract and error conditions.
    fn order_by_priority<K, F, P>(
        self,
        key_selector: F,
        priorities: P,
    ) -> Result<Ordered<Self::Item>, OrderError>
    where
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
        P: IntoIterator<Item = K>,
    {
        order_by_priority(self, key_selector, priorities)
    }
}

impl<I: IntoIterator> OrderByPriorityExt for I {}
