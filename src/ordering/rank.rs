//! Rank assignment for keys.

use crate::error::OrderError;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from key to rank, built fresh from a priority list.
///
/// Position in the priority list defines the rank: the first key gets rank 0,
/// the second rank 1, and so on. Keys absent from the list all share
/// [`unlisted_rank`](RankTable::unlisted_rank), which sorts after every
/// listed rank.
///
/// A table lives for the duration of one ordering call; nothing is cached
/// across calls.
#[derive(Debug, Clone)]
pub struct RankTable<K> {
    ranks: HashMap<K, usize>,
}

impl<K: Eq + Hash> RankTable<K> {
    /// Builds the table from a priority list in a single scan.
    ///
    /// Iteration order defines the ranks.
    ///
    /// # Errors
    ///
    /// [`OrderError::DuplicatePriority`] when the same key appears more than
    /// once. The error fires before any caller can observe the table.
    pub fn from_priorities<P>(priorities: P) -> Result<Self, OrderError>
    where
        P: IntoIterator<Item = K>,
    {
        let iter = priorities.into_iter();
        let mut ranks = HashMap::with_capacity(iter.size_hint().0);
        for (rank, key) in iter.enumerate() {
            if ranks.insert(key, rank).is_some() {
                return Err(OrderError::DuplicatePriority("priorities"));
            }
        }
        Ok(Self { ranks })
    }

    /// Rank of a listed key, or `None` when the key is not in the list.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.ranks.get(key).copied()
    }

    /// Rank of any key: its list position, or
    /// [`unlisted_rank`](Self::unlisted_rank) when unlisted.
    pub fn rank(&self, key: &K) -> usize {
        self.get(key).unwrap_or_else(|| self.unlisted_rank())
    }

    /// Rank shared by every unlisted key: `len() + 1`, one past the last
    /// explicit rank.
    ///
    /// The slot at exactly `len()` is never occupied, so `len() + 1` and
    /// `len()` order identically; the `+ 1` is the documented contract value
    /// and is kept as such.
    pub fn unlisted_rank(&self) -> usize {
        self.ranks.len() + 1
    }

    /// Number of listed keys.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the priority list was empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
