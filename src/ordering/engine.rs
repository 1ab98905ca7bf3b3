//! Core ordering routine.

use super::rank::RankTable;
use crate::error::OrderError;
use std::hash::Hash;

/// A materialized ordering produced by [`order_by_priority`].
///
/// The contents are fixed at construction and can be traversed any number of
/// times: borrow with [`iter`](Ordered::iter)/[`as_slice`](Ordered::as_slice)
/// or consume with [`into_vec`](Ordered::into_vec)/`IntoIterator`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ordered<T> {
    items: Vec<T>,
}

impl<T> Ordered<T> {
    /// Number of items in the ordering.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ordering holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the items in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The items in priority order, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the ordering into a plain vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Ordered<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ordered<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Ordered<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Ordered<T>> for Vec<T> {
    fn from(ordered: Ordered<T>) -> Self {
        ordered.items
    }
}

/// Orders `source` by the position of each item's key in `priorities`.
///
/// Listed keys rank by list position; unlisted keys all rank one past the end
/// of the list and therefore come last. Equal ranks keep their original
/// relative order: the sort is stable, both within a priority bucket and
/// within the unlisted bucket.
///
/// `key_selector` is invoked exactly once per item; each item's rank is
/// computed up front and the sort runs over the precomputed ranks.
///
/// # Errors
///
/// [`OrderError::DuplicatePriority`] when `priorities` yields the same key
/// more than once. The check runs before any ordering work, so it fires even
/// when `source` is empty.
///
/// # Examples
///
/// `priorities` accepts anything iterable, so array literals stand in for an
/// argument list:
///
/// ```
/// use priority_order::ordering::order_by_priority;
///
/// let severities = ["SUPER LOW", "LOW", "HIGH", "SUPER SUPER LOW", "MEDIUM"];
/// let ordered = order_by_priority(severities, |s| *s, ["HIGH", "MEDIUM", "LOW"]).unwrap();
/// assert_eq!(
///     ordered.as_slice(),
///     &["HIGH", "MEDIUM", "LOW", "SUPER LOW", "SUPER SUPER LOW"]
/// );
/// ```
pub fn order_by_priority<S, K, F, P>(
    source: S,
    mut key_selector: F,
    priorities: P,
) -> Result<Ordered<S::Item>, OrderError>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
    P: IntoIterator<Item = K>,
{
    let table = RankTable::from_priorities(priorities)?;

    let mut decorated: Vec<(usize, S::Item)> = source
        .into_iter()
        .map(|item| (table.rank(&key_selector(&item)), item))
        .collect();
    // slice::sort_by_key is stable; equal ranks keep input order.
    decorated.sort_by_key(|&(rank, _)| rank);

    Ok(Ordered {
        items: decorated.into_iter().map(|(_, item)| item).collect(),
    })
}
