//! Merging of closed integer intervals ([`interval::Interval`]) into a canonical
//! cover: the sorted list of maximal runs, each separated from the next by at
//! least one uncovered integer. Intervals `[a, b]` and `[b + 1, c]` count as one
//! run, since no integer lies between them.
//!
//! On top of the merge sits [`is_contained`], which answers whether an interval
//! is entirely covered by the union of a collection of others.
//!
//! ```
//! use interval_cover::{is_contained, sort_and_merge, Interval};
//!
//! let others = [Interval::new(4, 7), Interval::new(0, 2), Interval::new(3, 3)];
//! assert_eq!(sort_and_merge(&others).unwrap(), vec![Interval::new(0, 7)]);
//! assert!(is_contained(Interval::new(1, 6), &others));
//! assert!(!is_contained(Interval::new(6, 8), &others));
//! ```
//!
//! Every operation is a pure function of its arguments and works on its own
//! copies, so calls from separate threads need no coordination.

/// Interval containment built on top of merging.
pub mod containment;
pub mod error;
/// The closed interval value type.
pub mod interval;
/// Coalescing sorted intervals into a canonical cover.
pub mod merge;

pub use containment::is_contained;
pub use error::{IntervalError, Result};
pub use interval::{Integer, Interval};
pub use merge::{merge, sort_and_merge};
