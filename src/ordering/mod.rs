//! Priority-list ordering.
//!
//! Reorders a sequence so that items whose key appears in an explicit
//! priority list come first, in list order, followed by every item whose key
//! is not listed. Ties keep their original relative order.
//!
//! Three call shapes, one contract:
//!
//! - [`order_by_priority`]: plain function over any `IntoIterator`.
//! - [`OrderByPriorityExt`]: the same operation as a method on sequences.
//! - [`PriorityOrderer`]: builder with optional inputs, for callers that
//!   assemble the parts separately and want a missing one reported by name.
//!
//! # Design
//!
//! Rank lookup goes through a per-call [`RankTable`]; nothing is cached
//! across calls, so concurrent calls with different priority lists cannot
//! observe each other. The key projection runs once per item and the sort
//! over the resulting ranks is stable.

mod engine;
mod orderer;
mod rank;
mod types;

pub use engine::{order_by_priority, Ordered};
pub use orderer::PriorityOrderer;
pub use rank::RankTable;
pub use types::OrderByPriorityExt;
