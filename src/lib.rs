//! This crate provides [`Interval`], an interval over an ordered domain
//! whose bounds are each independently inclusive or exclusive, and
//! [`compare()`], an ordering over `Interval`s which allows them to be
//! used as the keys of an ordered map or to be sorted.
//!
//! ## Example looking up the interval containing a point
//!
//! ```rust
//! use interval_ord::{Interval, IntervalMap};
//!
//! let mut map = IntervalMap::new();
//!
//! map.insert(Interval::new(0.0, true, 1.0, false).unwrap(), 0)
//! 	.unwrap();
//! map.insert(Interval::new(1.0, false, 2.0, false).unwrap(), 1)
//! 	.unwrap();
//! map.insert(Interval::new(5.0, false, 6.0, true).unwrap(), 5)
//! 	.unwrap();
//!
//! // overlapping intervals cannot be ordered so cannot be inserted
//! assert!(map
//! 	.insert(Interval::new(1.0, true, 2.5, false).unwrap(), 2)
//! 	.is_err());
//!
//! assert_eq!(map.get_at_point(0.0), Some(&0));
//! assert_eq!(map.get_at_point(1.5), Some(&1));
//! assert_eq!(map.get_at_point(6.0), Some(&5));
//! assert_eq!(map.get_at_point(2.0), None);
//! ```
//!
//! ## Example sorting intervals
//!
//! ```rust
//! use interval_ord::{try_sorted, Interval};
//!
//! let sorted = try_sorted([
//! 	Interval::new(3.0, false, 3.1, false).unwrap(),
//! 	Interval::new(-5.0, false, -1.0, true).unwrap(),
//! 	Interval::new(0.0, true, 1.0, false).unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//! 	sorted.iter().map(|x| x.to_string()).collect::<Vec<_>>(),
//! 	["(-5, -1]", "[0, 1)", "(3, 3.1)"]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Scalars
//!
//! An interval whose lower and upper bounds are equal is a "scalar": it
//! contains exactly one point. Both bounds of a scalar are always
//! inclusive, since an excluded bound would leave it containing nothing,
//! and such intervals fail to construct.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is
//! contained within both of them. Whether two intervals meeting at a bound
//! overlap depends on whether *both* include that bound: `[0, 1]` and
//! `[1, 2]` overlap at `1`, but `[0, 1)` and `[1, 2]` do not.
//!
//! ### The Ordering
//!
//! Non-overlapping intervals are ordered by position. Overlapping
//! intervals have no sensible order, so comparing them is an error,
//! except in two cases which compare [`Ordering::Equal`]:
//!
//! - an interval compared with itself
//! - a scalar compared with an interval containing it
//!
//! The second case is what makes point lookup work: searching an ordered
//! container of non-overlapping intervals for a scalar finds the interval
//! that contains it.
//!
//! ### Why there is no `Ord` implementation
//!
//! The standard library's ordered containers and sorts require an
//! infallible total order. Implementing [`Ord`] for [`Interval`] would
//! mean either panicking or inventing an order for overlapping intervals,
//! which would silently corrupt a container. Instead this crate provides
//! [`IntervalMap`], [`IntervalSet`] and [`try_sort()`], which use
//! [`compare()`] and report overlaps as errors.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! [`Ordering::Equal`]: core::cmp::Ordering::Equal

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod test_intervals;

pub mod comparator;
pub mod interval;
pub mod map;
pub mod set;
pub mod sort;

pub use crate::comparator::{compare, less, IntervalComparator, OverlapError};
pub use crate::interval::{Interval, IntervalError};
pub use crate::map::{InsertError, IntervalMap};
pub use crate::set::IntervalSet;
pub use crate::sort::{is_sorted, try_sort, try_sorted};
