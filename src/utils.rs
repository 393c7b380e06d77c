use core::cell::Cell;
use core::cmp::Ordering;

use crate::comparator::{compare, ends_before, OverlapError};
use crate::Interval;

/// Makes a search closure for a [`BTreeMap`] ordering `target` against the
/// keys in the map.
///
/// The map can only accept an infallible comparison, so the first
/// [`OverlapError`] is stored in `overlap` and the closure reports
/// [`Ordering::Equal`] to stop the search on the overlapping key. Callers
/// must check `overlap` before trusting anything the search found.
///
/// [`BTreeMap`]: btree_monstrousity::BTreeMap
pub(crate) fn search_comp<'a, T>(
	target: &'a Interval<T>,
	overlap: &'a Cell<Option<OverlapError>>,
) -> impl FnMut(&Interval<T>) -> Ordering + 'a
where
	T: PartialOrd,
{
	move |inner_interval: &Interval<T>| {
		match compare(target, inner_interval) {
			Ok(ordering) => ordering,
			Err(error) => {
				overlap.set(Some(error));
				Ordering::Equal
			}
		}
	}
}

/// Makes the insertion closure for a [`BTreeMap`].
///
/// Only for use once a [`search_comp()`] search for the new key has
/// found neither an overlap nor an equal key.
///
/// [`BTreeMap`]: btree_monstrousity::BTreeMap
pub(crate) fn double_comp<T>(
) -> impl FnMut(&Interval<T>, &Interval<T>) -> Ordering
where
	T: PartialOrd,
{
	|inner_interval: &Interval<T>, new_interval: &Interval<T>| {
		compare(new_interval, inner_interval).unwrap_or(Ordering::Equal)
	}
}

/// Makes the start closure for a [`BTreeMap`] range over every key sharing
/// at least one point with `target`.
///
/// [`BTreeMap`]: btree_monstrousity::BTreeMap
pub(crate) fn overlapping_start_comp<'a, T>(
	target: &'a Interval<T>,
) -> impl FnMut(&Interval<T>) -> Ordering + 'a
where
	T: PartialOrd,
{
	move |inner_interval: &Interval<T>| {
		if ends_before(inner_interval, target) {
			Ordering::Greater
		} else {
			Ordering::Less
		}
	}
}

/// Makes the end closure for a [`BTreeMap`] range over every key sharing at
/// least one point with `target`.
///
/// [`BTreeMap`]: btree_monstrousity::BTreeMap
pub(crate) fn overlapping_end_comp<'a, T>(
	target: &'a Interval<T>,
) -> impl FnMut(&Interval<T>) -> Ordering + 'a
where
	T: PartialOrd,
{
	move |inner_interval: &Interval<T>| {
		if ends_before(target, inner_interval) {
			Ordering::Less
		} else {
			Ordering::Greater
		}
	}
}

/// Returns what a [`search_comp()`] search found, unless one of its
/// comparisons failed.
pub(crate) fn checked<R>(
	overlap: &Cell<Option<OverlapError>>,
	found: R,
) -> Result<R, OverlapError> {
	match overlap.take() {
		Some(error) => Err(error),
		None => Ok(found),
	}
}
