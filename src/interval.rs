//! A module containing [`Interval`] and the errors its construction can
//! produce.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Range, RangeInclusive};

use crate::comparator::{compare, OverlapError};

/// An interval over an ordered domain whose lower and upper bounds are each
/// independently inclusive or exclusive.
///
/// An `Interval` is always valid: its lower bound is never greater than its
/// upper bound, and if the two bounds are equal then both are inclusive.
/// Such an equal-bound interval is called a *scalar*, and is what
/// [`Interval::scalar()`] creates.
///
/// The fields are private so that the invariants cannot be broken after
/// construction. To change a single part of an interval use one of the
/// `with_*` methods, which re-validate the result.
///
/// # Examples
/// ```
/// use interval_ord::{Interval, IntervalError};
///
/// let half_open = Interval::new(0.0, true, 1.0, false).unwrap();
/// assert_eq!(half_open.to_string(), "[0, 1)");
///
/// assert_eq!(
/// 	Interval::new(1.0, true, 0.0, false),
/// 	Err(IntervalError::InvertedBounds)
/// );
///
/// assert!(Interval::scalar(0.5).is_scalar());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Interval<T> {
	lower_bound: T,
	lower_inclusive: bool,
	upper_bound: T,
	upper_inclusive: bool,
}

/// The error returned when trying to construct an invalid [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
	/// The lower bound was greater than the upper bound.
	InvertedBounds,
	/// The lower and upper bounds were equal but at least one of them was
	/// exclusive, which would describe an interval containing no points.
	NonInclusivePoint,
	/// The lower and upper bounds could not be ordered relative to each
	/// other, such as when one of them is a floating-point `NaN`.
	Incomparable,
}

impl fmt::Display for IntervalError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IntervalError::InvertedBounds => {
				f.write_str("lower bound cannot be greater than upper bound")
			}
			IntervalError::NonInclusivePoint => f.write_str(
				"lower and upper bound must be inclusive when they are equal",
			),
			IntervalError::Incomparable => {
				f.write_str("lower and upper bound cannot be ordered")
			}
		}
	}
}

impl std::error::Error for IntervalError {}

impl<T> Interval<T>
where
	T: PartialOrd,
{
	/// Makes a new `Interval` from its two bounds and their inclusivity.
	///
	/// # Errors
	///
	/// - [`IntervalError::InvertedBounds`] if `lower_bound > upper_bound`.
	/// - [`IntervalError::NonInclusivePoint`] if `lower_bound ==
	/// upper_bound` and either bound is exclusive.
	/// - [`IntervalError::Incomparable`] if the bounds have no ordering
	/// relative to each other.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{Interval, IntervalError};
	///
	/// assert!(Interval::new(0, true, 1, false).is_ok());
	/// assert_eq!(
	/// 	Interval::new(0, true, 0, false),
	/// 	Err(IntervalError::NonInclusivePoint)
	/// );
	/// assert_eq!(
	/// 	Interval::new(f64::NAN, true, 1.0, true),
	/// 	Err(IntervalError::Incomparable)
	/// );
	/// ```
	pub fn new(
		lower_bound: T,
		lower_inclusive: bool,
		upper_bound: T,
		upper_inclusive: bool,
	) -> Result<Self, IntervalError> {
		match lower_bound.partial_cmp(&upper_bound) {
			None => return Err(IntervalError::Incomparable),
			Some(Ordering::Greater) => {
				return Err(IntervalError::InvertedBounds)
			}
			Some(Ordering::Equal) if !(lower_inclusive && upper_inclusive) => {
				return Err(IntervalError::NonInclusivePoint)
			}
			Some(_) => {}
		}

		Ok(Interval {
			lower_bound,
			lower_inclusive,
			upper_bound,
			upper_inclusive,
		})
	}

	/// Compares `self` with `other`. See [`compare()`] for the rules used.
	pub fn compare(&self, other: &Self) -> Result<Ordering, OverlapError> {
		compare(self, other)
	}

	/// Returns `true` if both bounds are equal, meaning the interval is a
	/// single point.
	pub fn is_scalar(&self) -> bool {
		self.lower_bound == self.upper_bound
	}

	/// Returns a copy of `self` with the lower bound's inclusivity set to
	/// `inclusive`.
	///
	/// # Examples
	/// ```
	/// use interval_ord::Interval;
	///
	/// let closed = Interval::new(0, true, 1, true).unwrap();
	/// let half_open = closed.with_lower_inclusive(false).unwrap();
	///
	/// assert_eq!(half_open, Interval::new(0, false, 1, true).unwrap());
	/// ```
	pub fn with_lower_inclusive(
		self,
		inclusive: bool,
	) -> Result<Self, IntervalError> {
		Interval::new(
			self.lower_bound,
			inclusive,
			self.upper_bound,
			self.upper_inclusive,
		)
	}

	/// Returns a copy of `self` with the upper bound's inclusivity set to
	/// `inclusive`.
	pub fn with_upper_inclusive(
		self,
		inclusive: bool,
	) -> Result<Self, IntervalError> {
		Interval::new(
			self.lower_bound,
			self.lower_inclusive,
			self.upper_bound,
			inclusive,
		)
	}

	/// Returns a copy of `self` with the lower bound moved to `bound`.
	pub fn with_lower_bound(self, bound: T) -> Result<Self, IntervalError> {
		Interval::new(
			bound,
			self.lower_inclusive,
			self.upper_bound,
			self.upper_inclusive,
		)
	}

	/// Returns a copy of `self` with the upper bound moved to `bound`.
	pub fn with_upper_bound(self, bound: T) -> Result<Self, IntervalError> {
		Interval::new(
			self.lower_bound,
			self.lower_inclusive,
			bound,
			self.upper_inclusive,
		)
	}
}

impl<T> Interval<T>
where
	T: Clone,
{
	/// Makes a new scalar `Interval` containing only `value`.
	///
	/// This is equivalent to `Interval::new(value, true, value, true)` but
	/// can never fail.
	///
	/// # Examples
	/// ```
	/// use interval_ord::Interval;
	///
	/// assert_eq!(
	/// 	Interval::scalar(3),
	/// 	Interval::new(3, true, 3, true).unwrap()
	/// );
	/// ```
	pub fn scalar(value: T) -> Self {
		Interval {
			lower_bound: value.clone(),
			lower_inclusive: true,
			upper_bound: value,
			upper_inclusive: true,
		}
	}
}

impl<T> Interval<T> {
	/// The lower bound of the interval.
	pub fn lower_bound(&self) -> &T {
		&self.lower_bound
	}
	/// The upper bound of the interval.
	pub fn upper_bound(&self) -> &T {
		&self.upper_bound
	}
	/// Whether the lower bound is part of the interval.
	pub fn lower_inclusive(&self) -> bool {
		self.lower_inclusive
	}
	/// Whether the upper bound is part of the interval.
	pub fn upper_inclusive(&self) -> bool {
		self.upper_inclusive
	}
}

/// `start..=end` becomes `[start, end]`.
impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
	T: PartialOrd,
{
	type Error = IntervalError;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (start, end) = range.into_inner();
		Interval::new(start, true, end, true)
	}
}

/// `start..end` becomes `[start, end)`.
impl<T> TryFrom<Range<T>> for Interval<T>
where
	T: PartialOrd,
{
	type Error = IntervalError;

	fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
		Interval::new(range.start, true, range.end, false)
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.lower_inclusive { '[' } else { '(' };
		let close = if self.upper_inclusive { ']' } else { ')' };

		write!(
			f,
			"{open}{}, {}{close}",
			self.lower_bound, self.upper_bound
		)
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer};

	use super::Interval;

	#[derive(Deserialize)]
	#[serde(rename = "Interval")]
	struct IntervalFields<T> {
		lower_bound: T,
		lower_inclusive: bool,
		upper_bound: T,
		upper_inclusive: bool,
	}

	impl<'de, T> Deserialize<'de> for Interval<T>
	where
		T: Deserialize<'de> + PartialOrd,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let fields = IntervalFields::deserialize(deserializer)?;

			Interval::new(
				fields.lower_bound,
				fields.lower_inclusive,
				fields.upper_bound,
				fields.upper_inclusive,
			)
			.map_err(serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_intervals::{ee, ie, ii};

	#[test]
	fn new_tests() {
		assert_eq!(
			Interval::new(0, true, 1, false).map(|x| x.to_string()),
			Ok("[0, 1)".to_string())
		);
		assert_eq!(
			Interval::new(1, true, 0, false),
			Err(IntervalError::InvertedBounds)
		);
		assert_eq!(
			Interval::new(1, false, 0, false),
			Err(IntervalError::InvertedBounds)
		);
		assert_eq!(
			Interval::new(0, true, 0, false),
			Err(IntervalError::NonInclusivePoint)
		);
		assert_eq!(
			Interval::new(0, false, 0, true),
			Err(IntervalError::NonInclusivePoint)
		);
		assert_eq!(
			Interval::new(0, false, 0, false),
			Err(IntervalError::NonInclusivePoint)
		);
		assert_eq!(
			Interval::new(0.0, true, f64::NAN, true),
			Err(IntervalError::Incomparable)
		);
		assert_eq!(Interval::new(0, true, 0, true), Ok(Interval::scalar(0)));
	}

	#[test]
	fn fields_are_kept_verbatim() {
		let interval = Interval::new(-5.0, false, -1.0, true).unwrap();

		assert_eq!(interval.lower_bound(), &-5.0);
		assert_eq!(interval.lower_inclusive(), false);
		assert_eq!(interval.upper_bound(), &-1.0);
		assert_eq!(interval.upper_inclusive(), true);
		assert_eq!(interval.is_scalar(), false);
	}

	#[test]
	fn scalar_tests() {
		for value in [-1.5, 0.0, 0.5, 1e9] {
			let scalar = Interval::scalar(value);
			assert!(scalar.is_scalar());
			assert_eq!(Interval::new(value, true, value, true), Ok(scalar));
		}
	}

	#[test]
	fn with_tests() {
		assert_eq!(ii(0.0, 1.0).with_upper_inclusive(false), Ok(ie(0.0, 1.0)));
		assert_eq!(
			ie(0.0, 1.0)
				.with_lower_inclusive(false)
				.and_then(|x| x.with_upper_inclusive(false)),
			Ok(ee(0.0, 1.0))
		);
		assert_eq!(
			ii(0.0, 1.0).with_lower_bound(2.0),
			Err(IntervalError::InvertedBounds)
		);
		assert_eq!(
			ie(0.0, 1.0).with_upper_bound(0.0),
			Err(IntervalError::NonInclusivePoint)
		);
		assert_eq!(
			ii(0.0, 1.0).with_upper_bound(0.0),
			Ok(Interval::scalar(0.0))
		);
	}

	#[test]
	fn std_range_conversion_tests() {
		assert_eq!(Interval::try_from(0..=4), Interval::new(0, true, 4, true));
		assert_eq!(Interval::try_from(0..4), Interval::new(0, true, 4, false));
		assert_eq!(
			Interval::try_from(4..4),
			Err(IntervalError::NonInclusivePoint)
		);
		assert_eq!(Interval::try_from(4..=4), Ok(Interval::scalar(4)));
		#[allow(clippy::reversed_empty_ranges)]
		let inverted = Interval::try_from(5..=2);
		assert_eq!(inverted, Err(IntervalError::InvertedBounds));
	}

	#[test]
	fn display_tests() {
		assert_eq!(ii(0.0, 1.0).to_string(), "[0, 1]");
		assert_eq!(ee(3.0, 3.1).to_string(), "(3, 3.1)");
		assert_eq!(
			Interval::new(-5.0, false, -1.0, true).unwrap().to_string(),
			"(-5, -1]"
		);
		assert_eq!(Interval::scalar(2).to_string(), "[2, 2]");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let interval = ie(0.0, 1.5);
		let json = serde_json::to_string(&interval).unwrap();
		assert_eq!(
			json,
			r#"{"lower_bound":0.0,"lower_inclusive":true,"upper_bound":1.5,"upper_inclusive":false}"#
		);
		assert_eq!(
			serde_json::from_str::<Interval<f64>>(&json).unwrap(),
			interval
		);

		let inverted = r#"{"lower_bound":2,"lower_inclusive":true,"upper_bound":1,"upper_inclusive":true}"#;
		assert!(serde_json::from_str::<Interval<i32>>(inverted).is_err());
	}
}
