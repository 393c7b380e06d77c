//! A module containing [`IntervalSet`].
//!
//! Since [`IntervalSet`] is just a wrapper around [`IntervalMap`], most of
//! the methods' docs point towards the equivalent method's docs on
//! [`IntervalMap`] to prevent inconsistency.

use crate::map::IntoIter as IntervalMapIntoIter;
use crate::{Interval, IntervalMap, OverlapError};

/// An ordered set of non-overlapping [`Interval`]s based on
/// [`IntervalMap`].
///
/// `T` is the point type the intervals are over.
///
/// # Examples
/// ```
/// use interval_ord::{Interval, IntervalSet};
///
/// let mut set = IntervalSet::new();
///
/// assert_eq!(set.insert(Interval::new(0, true, 10, false).unwrap()), Ok(true));
/// assert_eq!(set.insert(Interval::new(10, true, 20, false).unwrap()), Ok(true));
///
/// assert_eq!(set.contains_point(10), true);
/// assert_eq!(set.contains_point(20), false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet<T> {
	inner: IntervalMap<T, ()>,
}

impl<T> IntervalSet<T>
where
	T: PartialOrd,
{
	/// Adds an interval to the set, returning whether it was newly
	/// inserted. If an equal interval was already present the set is left
	/// unchanged and `false` is returned.
	///
	/// # Errors
	///
	/// Returns [`OverlapError`] in the same cases as [`IntervalMap::get()`].
	pub fn insert(&mut self, interval: Interval<T>) -> Result<bool, OverlapError> {
		match self.inner.insert(interval, ()) {
			Ok(previous) => Ok(previous.is_none()),
			Err(_) => Err(OverlapError),
		}
	}
	/// See [`IntervalMap::get_key_value()`] for more details.
	pub fn get(
		&self,
		interval: &Interval<T>,
	) -> Result<Option<&Interval<T>>, OverlapError> {
		self.inner
			.get_key_value(interval)
			.map(|found| found.map(first))
	}
	/// See [`IntervalMap::contains_key()`] for more details.
	pub fn contains(&self, interval: &Interval<T>) -> Result<bool, OverlapError> {
		self.inner.contains_key(interval)
	}
	/// Removes the interval comparing equal to `interval` from the set,
	/// returning whether one was present.
	///
	/// See [`IntervalMap::remove()`] for more details.
	pub fn remove(&mut self, interval: &Interval<T>) -> Result<bool, OverlapError> {
		self.inner.remove(interval).map(|found| found.is_some())
	}
	/// See [`IntervalMap::from_slice_strict()`] for more details.
	pub fn from_slice_strict<const N: usize>(
		slice: [Interval<T>; N],
	) -> Result<IntervalSet<T>, OverlapError> {
		IntervalSet::from_iter_strict(slice)
	}
	/// See [`IntervalMap::from_iter_strict()`] for more details.
	pub fn from_iter_strict(
		iter: impl IntoIterator<Item = Interval<T>>,
	) -> Result<IntervalSet<T>, OverlapError> {
		let mut set = IntervalSet::new();
		for interval in iter {
			set.insert(interval)?;
		}
		return Ok(set);
	}
}

impl<T> IntervalSet<T>
where
	T: PartialOrd + Clone,
{
	/// See [`IntervalMap::get_key_value_at_point()`] for more details.
	pub fn get_at_point(&self, point: T) -> Option<&Interval<T>> {
		self.inner.get_key_value_at_point(point).map(first)
	}
	/// See [`IntervalMap::contains_point()`] for more details.
	pub fn contains_point(&self, point: T) -> bool {
		self.inner.contains_point(point)
	}
}

impl<T> IntervalSet<T> {
	/// Makes a new, empty `IntervalSet`.
	///
	/// # Examples
	/// ```
	/// use interval_ord::IntervalSet;
	///
	/// let set: IntervalSet<f64> = IntervalSet::new();
	/// ```
	pub fn new() -> Self {
		IntervalSet {
			inner: IntervalMap::new(),
		}
	}
	/// See [`IntervalMap::len()`] for more details.
	pub fn len(&self) -> usize {
		self.inner.len()
	}
	/// See [`IntervalMap::is_empty()`] for more details.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
	/// See [`IntervalMap::iter()`] for more details.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Interval<T>> {
		self.inner.iter().map(first)
	}
	/// See [`IntervalMap::first_key_value()`] for more details.
	pub fn first(&self) -> Option<&Interval<T>> {
		self.inner.first_key_value().map(first)
	}
	/// See [`IntervalMap::last_key_value()`] for more details.
	pub fn last(&self) -> Option<&Interval<T>> {
		self.inner.last_key_value().map(first)
	}
}

impl<T> IntoIterator for IntervalSet<T> {
	type Item = Interval<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}
/// An owning iterator over the intervals of an [`IntervalSet`] in
/// ascending order.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalSet`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: IntervalMapIntoIter<T, ()>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}

impl<T> Default for IntervalSet<T> {
	fn default() -> Self {
		IntervalSet {
			inner: IntervalMap::default(),
		}
	}
}

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Interval, IntervalSet};

	impl<T> Serialize for IntervalSet<T>
	where
		T: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.iter() {
				seq.serialize_element(&interval)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for IntervalSet<T>
	where
		T: PartialOrd + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalSetVisitor { t: PhantomData })
		}
	}

	struct IntervalSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for IntervalSetVisitor<T>
	where
		T: PartialOrd + Deserialize<'de>,
	{
		type Value = IntervalSet<T>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an IntervalSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = IntervalSet::new();
			while let Some(interval) = access.next_element::<Interval<T>>()? {
				set.insert(interval)
					.or(Err(serde::de::Error::custom("intervals overlap")))?;
			}
			Ok(set)
		}
	}
}
