//! A module containing functions for sorting sequences of [`Interval`]s.
//!
//! The standard library's sorts require a total order, so they cannot be
//! given [`compare()`] directly without deciding what to do about overlaps.
//! These functions instead stop and return the [`OverlapError`].

use core::cmp::Ordering;

use itertools::Itertools;
use tracing::debug;

use crate::comparator::{compare, OverlapError};
use crate::Interval;

/// Sorts a slice of intervals in ascending order using [`compare()`].
///
/// The sort is stable: intervals that compare equal keep their relative
/// order.
///
/// # Errors
///
/// Returns [`OverlapError`] if any two non-scalar intervals in the slice
/// overlap, or if an interval has a bound that cannot be ordered. A scalar
/// inside an interval compares equal to it rather than overlapping it. The
/// slice is left in an unspecified order in the error case.
///
/// # Examples
/// ```
/// use interval_ord::{try_sort, Interval};
///
/// let mut intervals = [
/// 	Interval::new(0.0, true, 1.0, false).unwrap(),
/// 	Interval::new(3.0, false, 3.1, false).unwrap(),
/// 	Interval::new(-5.0, false, -1.0, true).unwrap(),
/// 	Interval::new(1.1, true, 2.1, true).unwrap(),
/// ];
///
/// try_sort(&mut intervals).unwrap();
///
/// assert_eq!(
/// 	intervals.map(|x| x.to_string()),
/// 	["(-5, -1]", "[0, 1)", "[1.1, 2.1]", "(3, 3.1)"]
/// );
/// ```
pub fn try_sort<T>(intervals: &mut [Interval<T>]) -> Result<(), OverlapError>
where
	T: PartialOrd,
{
	for unsorted in 1..intervals.len() {
		let (sorted, rest) = intervals.split_at(unsorted);

		let position = match insertion_point(sorted, &rest[0]) {
			Ok(position) => position,
			Err(error) => {
				debug!(
					index = unsorted,
					"sort failed on an overlapping interval"
				);
				return Err(error);
			}
		};

		intervals[position..=unsorted].rotate_right(1);
	}

	// the insertion searches can stop on a scalar inside a range before
	// reaching another range that range overlaps
	let ranges = intervals.iter().filter(|interval| !interval.is_scalar());
	for (current, next) in ranges.tuple_windows() {
		// disjoint ranges are always left in order, so a misordered pair
		// means an overlap exists elsewhere in the slice
		if compare(current, next)?.is_gt() {
			debug!("sort left overlapping intervals out of order");
			return Err(OverlapError);
		}
	}

	Ok(())
}

/// Sorts an iterator of intervals into a [`Vec`] in ascending order. See
/// [`try_sort()`] for details.
///
/// # Errors
///
/// Returns [`OverlapError`] in the same cases as [`try_sort()`].
pub fn try_sorted<T>(
	intervals: impl IntoIterator<Item = Interval<T>>,
) -> Result<Vec<Interval<T>>, OverlapError>
where
	T: PartialOrd,
{
	let mut intervals = intervals.into_iter().collect::<Vec<_>>();
	try_sort(&mut intervals)?;
	Ok(intervals)
}

/// Returns `true` if every interval in the slice comes before or is equal
/// to the next one.
///
/// Only neighbouring intervals are compared, so this does not detect
/// overlaps between intervals further apart.
///
/// # Errors
///
/// Returns [`OverlapError`] if two neighbouring intervals overlap.
///
/// # Examples
/// ```
/// use interval_ord::{is_sorted, Interval, OverlapError};
///
/// let low = Interval::new(0, true, 5, false).unwrap();
/// let high = Interval::new(5, true, 10, false).unwrap();
/// let wide = Interval::new(0, true, 10, false).unwrap();
///
/// assert_eq!(is_sorted(&[low, high]), Ok(true));
/// assert_eq!(is_sorted(&[high, low]), Ok(false));
/// assert_eq!(is_sorted(&[low, wide]), Err(OverlapError));
/// ```
pub fn is_sorted<T>(intervals: &[Interval<T>]) -> Result<bool, OverlapError>
where
	T: PartialOrd,
{
	for (current, next) in intervals.iter().tuple_windows() {
		if compare(current, next)?.is_gt() {
			return Ok(false);
		}
	}

	Ok(true)
}

/// Binary searches the already sorted `sorted` for the index after the
/// last interval not greater than `interval`.
///
/// Any interval in `sorted` overlapping `interval` lies between the last
/// interval before it and the first interval after it, so the search always
/// compares against at least one of them.
fn insertion_point<T>(
	sorted: &[Interval<T>],
	interval: &Interval<T>,
) -> Result<usize, OverlapError>
where
	T: PartialOrd,
{
	let mut low = 0;
	let mut high = sorted.len();

	while low < high {
		let middle = low + (high - low) / 2;

		match compare(interval, &sorted[middle])? {
			Ordering::Less => high = middle,
			Ordering::Equal | Ordering::Greater => low = middle + 1,
		}
	}

	Ok(low)
}
