//! Ordering sequences by an explicit priority list.
//!
//! Given a list of key values, [`ordering`] ranks each item of a sequence by
//! its key's position in that list:
//!
//! - **Listed keys** sort to their list position: items carrying the first
//!   listed key come first, the second next, and so on.
//! - **Unlisted keys** all sort after every listed key.
//! - **Ties are stable**: items of equal rank (the same listed key, or both
//!   unlisted) keep the relative order they had in the input.
//!
//! ```
//! use priority_order::ordering::OrderByPriorityExt;
//!
//! let severities = ["SUPER LOW", "LOW", "HIGH", "SUPER SUPER LOW", "MEDIUM"];
//! let ordered = severities
//!     .order_by_priority(|s| *s, ["HIGH", "MEDIUM", "LOW"])
//!     .unwrap();
//! assert_eq!(
//!     ordered.as_slice(),
//!     &["HIGH", "MEDIUM", "LOW", "SUPER LOW", "SUPER SUPER LOW"]
//! );
//! ```
//!
//! # Design
//!
//! The transformation is pure and synchronous: a per-call rank table, one key
//! projection per item, one stable sort. No global or cross-call state is
//! involved, so every invocation is independent and re-entrant. Duplicate
//! priority keys, and on the builder entry point inputs that were never
//! supplied, fail with a typed [`error::OrderError`] before any ordering
//! work happens.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` on [`ordering::Ordered`] and
//!   `Serialize` on [`error::OrderError`].

pub mod error;
pub mod ordering;
