//! Builder entry point with optional inputs.

use super::engine::{order_by_priority, Ordered};
use crate::error::OrderError;
use std::hash::Hash;

/// Builder that assembles an ordering call from independently supplied parts.
///
/// The function entry points require all three inputs by type. This builder
/// instead starts with nothing supplied and reports the first input still
/// missing when [`order`](Self::order) runs, so "never supplied" stays
/// distinguishable from "supplied but empty".
///
/// # Examples
///
/// ```
/// use priority_order::ordering::PriorityOrderer;
///
/// let ordered = PriorityOrderer::new()
///     .with_source(["SUPER LOW", "LOW", "HIGH", "SUPER SUPER LOW", "MEDIUM"])
///     .with_key_selector(|s: &&str| *s)
///     .with_priorities(["HIGH", "MEDIUM", "LOW"])
///     .order()
///     .unwrap();
/// assert_eq!(
///     ordered.as_slice(),
///     &["HIGH", "MEDIUM", "LOW", "SUPER LOW", "SUPER SUPER LOW"]
/// );
/// ```
///
/// Missing inputs fail by name:
///
/// ```
/// use priority_order::error::OrderError;
/// use priority_order::ordering::PriorityOrderer;
///
/// let result = PriorityOrderer::<&str, &str>::new().order();
/// assert_eq!(result.unwrap_err(), OrderError::MissingArgument("source"));
/// ```
pub struct PriorityOrderer<T, K> {
    source: Option<Vec<T>>,
    key_selector: Option<Box<dyn Fn(&T) -> K>>,
    priorities: Option<Vec<K>>,
}

impl<T, K> PriorityOrderer<T, K> {
    /// Creates an orderer with nothing supplied yet.
    pub fn new() -> Self {
        Self {
            source: None,
            key_selector: None,
            priorities: None,
        }
    }

    /// Supplies the sequence to order.
    ///
    /// An empty sequence is a valid input.
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: IntoIterator<Item = T>,
    {
        self.source = Some(source.into_iter().collect());
        self
    }

    /// Supplies the key projection, invoked once per item during ordering.
    pub fn with_key_selector<F>(mut self, key_selector: F) -> Self
    where
        F: Fn(&T) -> K + 'static,
    {
        self.key_selector = Some(Box::new(key_selector));
        self
    }

    /// Supplies the priority list.
    ///
    /// Keys must be distinct; an empty list is valid and leaves every item
    /// unlisted.
    pub fn with_priorities<P>(mut self, priorities: P) -> Self
    where
        P: IntoIterator<Item = K>,
    {
        self.priorities = Some(priorities.into_iter().collect());
        self
    }

    /// Runs the ordering.
    ///
    /// # Errors
    ///
    /// [`OrderError::MissingArgument`] for the first input never supplied,
    /// checked in declaration order (`source`, `key_selector`, `priorities`).
    /// Once all three are present, the duplicate-priority check applies as in
    /// [`order_by_priority`].
    pub fn order(self) -> Result<Ordered<T>, OrderError>
    where
        K: Eq + Hash,
    {
        let source = self
            .source
            .ok_or(OrderError::MissingArgument("source"))?;
        let key_selector = self
            .key_selector
            .ok_or(OrderError::MissingArgument("key_selector"))?;
        let priorities = self
            .priorities
            .ok_or(OrderError::MissingArgument("priorities"))?;

        order_by_priority(source, key_selector, priorities)
    }
}

impl<T, K> Default for PriorityOrderer<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
