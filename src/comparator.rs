//! A module containing [`compare()`], the ordering used for [`Interval`]s
//! throughout this crate.
//!
//! The ordering is only partial: two different intervals which share at
//! least one point have no defined order, and comparing them returns an
//! [`OverlapError`]. The one exception is when one of the intervals is a
//! scalar, in which case sharing a point means the scalar is *contained*
//! in the other interval and the two compare [`Ordering::Equal`]. This is
//! what allows looking up the interval containing a point in an ordered
//! container using only its ordering.

use core::cmp::Ordering;
use core::fmt;

use crate::Interval;

/// The error returned when comparing two intervals which overlap and so
/// have no defined order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlapError;

impl fmt::Display for OverlapError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("invalid comparison between overlapping intervals")
	}
}

impl std::error::Error for OverlapError {}

/// A stateless comparator for [`Interval`]s, for use where a value rather
/// than a function is more convenient.
///
/// Both methods are exactly [`compare()`] and [`less()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalComparator;

impl IntervalComparator {
	/// See [`compare()`].
	pub fn compare<T>(
		&self,
		lhs: &Interval<T>,
		rhs: &Interval<T>,
	) -> Result<Ordering, OverlapError>
	where
		T: PartialOrd,
	{
		compare(lhs, rhs)
	}

	/// See [`less()`].
	pub fn less<T>(
		&self,
		lhs: &Interval<T>,
		rhs: &Interval<T>,
	) -> Result<bool, OverlapError>
	where
		T: PartialOrd,
	{
		less(lhs, rhs)
	}
}

/// Compares two intervals.
///
/// - Two scalars are ordered by their values.
/// - A scalar and a non-scalar interval are [`Ordering::Equal`] if the
/// scalar's value lies within the interval, taking bound inclusivity into
/// account. Otherwise the scalar is before or after the interval.
/// - Two non-scalar intervals are [`Ordering::Equal`] only if they are
/// identical. Otherwise one must end before the other starts, where two
/// intervals meeting at a point are only overlapping if both of them
/// include that point.
///
/// # Errors
///
/// Returns [`OverlapError`] if both intervals are non-scalar, are not
/// identical, and share at least one point. Intervals with a bound that
/// cannot be ordered, such as `Interval::scalar(f64::NAN)`, also have no
/// position and always return [`OverlapError`].
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
///
/// use interval_ord::{compare, Interval, OverlapError};
///
/// let closed = Interval::new(0.0, true, 1.0, true).unwrap();
/// let half_open = Interval::new(0.0, true, 1.0, false).unwrap();
///
/// // a point within an interval is "equal" to it
/// assert_eq!(
/// 	compare(&Interval::scalar(0.5), &closed),
/// 	Ok(Ordering::Equal)
/// );
/// // but a point on an excluded bound is outside of it
/// assert_eq!(
/// 	compare(&Interval::scalar(1.0), &half_open),
/// 	Ok(Ordering::Greater)
/// );
///
/// let touching = Interval::new(1.0, true, 2.0, true).unwrap();
/// assert_eq!(compare(&half_open, &touching), Ok(Ordering::Less));
/// assert_eq!(compare(&closed, &touching), Err(OverlapError));
/// ```
pub fn compare<T>(
	lhs: &Interval<T>,
	rhs: &Interval<T>,
) -> Result<Ordering, OverlapError>
where
	T: PartialOrd,
{
	match (lhs.is_scalar(), rhs.is_scalar()) {
		(true, true) => Ok(cmp_points(lhs.lower_bound(), rhs.lower_bound())),
		(true, false) => cmp_point_with_interval(lhs.lower_bound(), rhs),
		(false, true) => cmp_point_with_interval(rhs.lower_bound(), lhs)
			.map(Ordering::reverse),
		(false, false) => cmp_intervals(lhs, rhs),
	}
}

/// Returns whether `lhs` comes strictly before `rhs`.
///
/// This is the "less-than" form of [`compare()`] for use with APIs that
/// expect one.
///
/// # Errors
///
/// Returns [`OverlapError`] in the same cases as [`compare()`].
pub fn less<T>(
	lhs: &Interval<T>,
	rhs: &Interval<T>,
) -> Result<bool, OverlapError>
where
	T: PartialOrd,
{
	compare(lhs, rhs).map(Ordering::is_lt)
}

fn cmp_points<T>(lhs: &T, rhs: &T) -> Ordering
where
	T: PartialOrd,
{
	if lhs < rhs {
		Ordering::Less
	} else if lhs == rhs {
		Ordering::Equal
	} else {
		Ordering::Greater
	}
}

/// `interval` must not be a scalar.
fn cmp_point_with_interval<T>(
	point: &T,
	interval: &Interval<T>,
) -> Result<Ordering, OverlapError>
where
	T: PartialOrd,
{
	// a `NaN` point or bound is in no position relative to the other
	match point.partial_cmp(interval.lower_bound()).ok_or(OverlapError)? {
		Ordering::Less => return Ok(Ordering::Less),
		Ordering::Equal if !interval.lower_inclusive() => {
			return Ok(Ordering::Less);
		}
		_ => {}
	}

	match point.partial_cmp(interval.upper_bound()).ok_or(OverlapError)? {
		Ordering::Greater => Ok(Ordering::Greater),
		Ordering::Equal if !interval.upper_inclusive() => {
			Ok(Ordering::Greater)
		}
		_ => Ok(Ordering::Equal),
	}
}

/// Neither interval may be a scalar.
fn cmp_intervals<T>(
	lhs: &Interval<T>,
	rhs: &Interval<T>,
) -> Result<Ordering, OverlapError>
where
	T: PartialOrd,
{
	if lhs == rhs {
		Ok(Ordering::Equal)
	} else if ends_before(lhs, rhs) {
		Ok(Ordering::Less)
	} else if ends_before(rhs, lhs) {
		Ok(Ordering::Greater)
	} else {
		Err(OverlapError)
	}
}

/// Whether every point in `first` is less than every point in `second`.
pub(crate) fn ends_before<T>(first: &Interval<T>, second: &Interval<T>) -> bool
where
	T: PartialOrd,
{
	let end = first.upper_bound();
	let start = second.lower_bound();

	end < start
		|| (end == start
			&& !(first.upper_inclusive() && second.lower_inclusive()))
}
