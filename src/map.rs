//! A module containing [`IntervalMap`].

use core::cell::Cell;
use core::fmt;
use core::mem;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use tracing::{debug, trace};

use crate::utils::{
	checked, double_comp, overlapping_end_comp, overlapping_start_comp,
	search_comp,
};
use crate::{Interval, OverlapError};

/// An ordered map keyed by [`Interval`]s, based on [`BTreeMap`].
///
/// Keys are ordered using [`compare()`](crate::compare), so no two keys in
/// the map ever overlap. Because a scalar compares
/// [`Ordering::Equal`](core::cmp::Ordering::Equal) to any interval
/// containing it, looking up a scalar finds the entry whose interval
/// contains that point, which is what the `*_at_point` methods do.
///
/// `T` is the point type the intervals are over and `V` is the value type.
///
/// # Examples
/// ```
/// use interval_ord::{Interval, IntervalMap};
///
/// let mut map = IntervalMap::new();
///
/// map.insert(Interval::new(0.0, true, 1.0, false).unwrap(), "low")
/// 	.unwrap();
/// map.insert(Interval::new(1.0, false, 2.0, false).unwrap(), "mid")
/// 	.unwrap();
/// map.insert(Interval::new(5.0, false, 6.0, true).unwrap(), "high")
/// 	.unwrap();
///
/// // overlapping intervals are rejected
/// assert!(map
/// 	.insert(Interval::new(1.0, true, 2.5, false).unwrap(), "bad")
/// 	.is_err());
///
/// assert_eq!(map.get_at_point(0.0), Some(&"low"));
/// assert_eq!(map.get_at_point(1.5), Some(&"mid"));
/// assert_eq!(map.get_at_point(6.0), Some(&"high"));
/// // (1, 2) excludes 2
/// assert_eq!(map.get_at_point(2.0), None);
///
/// for (interval, value) in map.iter() {
/// 	println!("{interval} is mapped to {value}");
/// }
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<T, V> {
	pub(crate) inner: BTreeMap<Interval<T>, V>,
}

/// The error returned when inserting an interval that overlaps another
/// interval already in the map. Contains the entry that was not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError<T, V> {
	/// The interval which was not inserted.
	pub interval: Interval<T>,
	/// The value which was not inserted.
	pub value: V,
}

impl<T, V> fmt::Display for InsertError<T, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("interval overlaps an interval already in the map")
	}
}

impl<T, V> std::error::Error for InsertError<T, V>
where
	T: fmt::Debug,
	V: fmt::Debug,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&OverlapError)
	}
}

impl<T, V> IntervalMap<T, V>
where
	T: PartialOrd,
{
	/// Returns a reference to the value of the entry whose key compares
	/// equal to `interval`, if any.
	///
	/// # Errors
	///
	/// Returns [`OverlapError`] if `interval` overlaps a key in the map
	/// without being equal to it. A non-scalar `interval` compares equal to
	/// every scalar key it contains, so it also returns [`OverlapError`] if
	/// `interval` shares a point with more than one key.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{Interval, IntervalMap, OverlapError};
	///
	/// let closed = Interval::new(0, true, 10, true).unwrap();
	/// let map = IntervalMap::from_slice_strict([(closed, 'a')]).unwrap();
	///
	/// assert_eq!(map.get(&closed), Ok(Some(&'a')));
	/// assert_eq!(map.get(&Interval::scalar(4)), Ok(Some(&'a')));
	/// assert_eq!(map.get(&Interval::scalar(11)), Ok(None));
	/// assert_eq!(
	/// 	map.get(&Interval::new(5, true, 15, true).unwrap()),
	/// 	Err(OverlapError)
	/// );
	/// ```
	pub fn get(&self, interval: &Interval<T>) -> Result<Option<&V>, OverlapError> {
		self.get_key_value(interval)
			.map(|found| found.map(|(_, value)| value))
	}

	/// Returns the entry whose key compares equal to `interval`, if any.
	///
	/// # Errors
	///
	/// See [`IntervalMap::get()`].
	pub fn get_key_value(
		&self,
		interval: &Interval<T>,
	) -> Result<Option<(&Interval<T>, &V)>, OverlapError> {
		let overlap = Cell::new(None);
		let found = self.inner.get_key_value(search_comp(interval, &overlap));
		let found = checked(&overlap, found)?;

		// the search can stop on a contained scalar key before reaching any
		// other key the interval shares a point with
		if let Some((key, _)) = found {
			if key.is_scalar() && !interval.is_scalar() {
				self.single_overlapping_key(interval)?;
			}
		}

		Ok(found)
	}

	fn single_overlapping_key(
		&self,
		interval: &Interval<T>,
	) -> Result<(), OverlapError> {
		let mut overlapping = self.inner.range(
			overlapping_start_comp(interval),
			SearchBoundCustom::Included,
			overlapping_end_comp(interval),
			SearchBoundCustom::Included,
		);

		match overlapping.nth(1) {
			Some(_) => {
				debug!("interval contains a scalar key and overlaps another key");
				Err(OverlapError)
			}
			None => Ok(()),
		}
	}

	/// Returns a mutable reference to the value of the entry whose key
	/// compares equal to `interval`, if any.
	///
	/// # Errors
	///
	/// See [`IntervalMap::get()`].
	pub fn get_mut(
		&mut self,
		interval: &Interval<T>,
	) -> Result<Option<&mut V>, OverlapError> {
		if !self.contains_key(interval)? {
			return Ok(None);
		}

		// the search above already succeeded so cannot overlap now
		let overlap = Cell::new(None);
		Ok(self.inner.get_mut(search_comp(interval, &overlap)))
	}

	/// Returns `true` if the map contains a key that compares equal to
	/// `interval`.
	///
	/// # Errors
	///
	/// See [`IntervalMap::get()`].
	pub fn contains_key(
		&self,
		interval: &Interval<T>,
	) -> Result<bool, OverlapError> {
		self.get_key_value(interval).map(|found| found.is_some())
	}

	/// Inserts an entry into the map.
	///
	/// If the map already has a key comparing equal to `interval`, that
	/// entry's value is replaced and the old value returned, while its key
	/// is left as it was. Note that a scalar compares equal to an interval
	/// containing it, in either direction.
	///
	/// # Errors
	///
	/// Returns an [`InsertError`] holding the entry in the same cases
	/// [`IntervalMap::get()`] returns [`OverlapError`]. The map is not
	/// changed.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{InsertError, Interval, IntervalMap};
	///
	/// let mut map = IntervalMap::new();
	/// let first = Interval::new(5, true, 10, false).unwrap();
	/// let second = Interval::new(9, true, 12, true).unwrap();
	///
	/// assert_eq!(map.insert(first, 9), Ok(None));
	/// assert_eq!(map.insert(first, 3), Ok(Some(9)));
	/// assert_eq!(
	/// 	map.insert(second, 2),
	/// 	Err(InsertError {
	/// 		interval: second,
	/// 		value: 2
	/// 	})
	/// );
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn insert(
		&mut self,
		interval: Interval<T>,
		value: V,
	) -> Result<Option<V>, InsertError<T, V>> {
		match self.get_mut(&interval) {
			Err(_) => {
				debug!(
					len = self.inner.len(),
					"rejected insertion of an overlapping interval"
				);
				Err(InsertError { interval, value })
			}
			Ok(Some(existing)) => Ok(Some(mem::replace(existing, value))),
			Ok(None) => {
				self.inner.insert(interval, value, double_comp());
				Ok(None)
			}
		}
	}

	/// Removes the entry whose key compares equal to `interval` from the
	/// map, returning its value.
	///
	/// # Errors
	///
	/// Returns [`OverlapError`] in the same cases as [`IntervalMap::get()`].
	/// The map is not changed.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{Interval, IntervalMap};
	///
	/// let interval = Interval::new(0, true, 10, true).unwrap();
	/// let mut map = IntervalMap::from_slice_strict([(interval, true)]).unwrap();
	///
	/// // removing by a point removes the interval containing it
	/// assert_eq!(map.remove(&Interval::scalar(3)), Ok(Some(true)));
	/// assert_eq!(map.is_empty(), true);
	/// ```
	pub fn remove(
		&mut self,
		interval: &Interval<T>,
	) -> Result<Option<V>, OverlapError> {
		if !self.contains_key(interval)? {
			return Ok(None);
		}

		// the search above already succeeded so cannot overlap now
		let overlap = Cell::new(None);
		Ok(self.inner.remove(search_comp(interval, &overlap)))
	}

	/// Makes an `IntervalMap` from a slice of entries using
	/// [`IntervalMap::insert()`].
	///
	/// # Errors
	///
	/// Returns the first [`InsertError`] encountered.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{Interval, IntervalMap};
	///
	/// let map = IntervalMap::from_slice_strict([
	/// 	(Interval::new(1, true, 4, false).unwrap(), false),
	/// 	(Interval::new(4, true, 8, false).unwrap(), true),
	/// 	(Interval::new(8, true, 100, false).unwrap(), false),
	/// ])
	/// .unwrap();
	/// ```
	pub fn from_slice_strict<const N: usize>(
		slice: [(Interval<T>, V); N],
	) -> Result<IntervalMap<T, V>, InsertError<T, V>> {
		IntervalMap::from_iter_strict(slice)
	}

	/// Collects an `IntervalMap` from an iterator of entries using
	/// [`IntervalMap::insert()`].
	///
	/// # Errors
	///
	/// Returns the first [`InsertError`] encountered.
	pub fn from_iter_strict(
		iter: impl IntoIterator<Item = (Interval<T>, V)>,
	) -> Result<IntervalMap<T, V>, InsertError<T, V>> {
		let mut map = IntervalMap::new();
		for (interval, value) in iter {
			map.insert(interval, value)?;
		}
		Ok(map)
	}
}

impl<T, V> IntervalMap<T, V>
where
	T: PartialOrd + Clone,
{
	/// Returns a reference to the value of the entry whose interval
	/// contains `point`, if any.
	///
	/// # Examples
	/// ```
	/// use interval_ord::{Interval, IntervalMap};
	///
	/// let map = IntervalMap::from_slice_strict([
	/// 	(Interval::new(1, true, 4, false).unwrap(), false),
	/// 	(Interval::new(4, true, 8, false).unwrap(), true),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(map.get_at_point(3), Some(&false));
	/// assert_eq!(map.get_at_point(4), Some(&true));
	/// assert_eq!(map.get_at_point(8), None);
	/// ```
	pub fn get_at_point(&self, point: T) -> Option<&V> {
		self.get_key_value_at_point(point).map(|(_, value)| value)
	}

	/// Returns a mutable reference to the value of the entry whose
	/// interval contains `point`, if any.
	pub fn get_at_point_mut(&mut self, point: T) -> Option<&mut V> {
		// a point that cannot be ordered is in no interval
		self.get_mut(&Interval::scalar(point)).ok().flatten()
	}

	/// Returns the entry whose interval contains `point`, if any.
	pub fn get_key_value_at_point(
		&self,
		point: T,
	) -> Option<(&Interval<T>, &V)> {
		let found = self.get_key_value(&Interval::scalar(point)).ok().flatten();

		if found.is_none() {
			trace!(len = self.inner.len(), "no interval contains the point");
		}

		found
	}

	/// Returns `true` if the map contains an interval that contains
	/// `point`.
	pub fn contains_point(&self, point: T) -> bool {
		self.get_key_value_at_point(point).is_some()
	}
}

impl<T, V> IntervalMap<T, V> {
	/// Makes a new, empty `IntervalMap`.
	///
	/// # Examples
	/// ```
	/// use interval_ord::IntervalMap;
	///
	/// let map: IntervalMap<f64, bool> = IntervalMap::new();
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of entries in the map.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the map contains no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every entry in the map in ascending order.
	pub fn iter(
		&self,
	) -> impl DoubleEndedIterator<Item = (&Interval<T>, &V)> {
		self.inner.iter()
	}

	/// Returns a mutable iterator over every entry in the map in ascending
	/// order.
	pub fn iter_mut(
		&mut self,
	) -> impl DoubleEndedIterator<Item = (&Interval<T>, &mut V)> {
		self.inner.iter_mut()
	}

	/// Returns the first entry in the map, if any.
	pub fn first_key_value(&self) -> Option<(&Interval<T>, &V)> {
		self.inner.first_key_value()
	}

	/// Returns the last entry in the map, if any.
	pub fn last_key_value(&self) -> Option<(&Interval<T>, &V)> {
		self.inner.last_key_value()
	}
}

// Trait Impls ==========================

impl<T, V> IntoIterator for IntervalMap<T, V> {
	type Item = (Interval<T>, V);
	type IntoIter = IntoIter<T, V>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}
/// An owning iterator over the entries of an [`IntervalMap`] in ascending
/// order.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalMap`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T, V> {
	inner: BTreeMapIntoIter<Interval<T>, V>,
}
impl<T, V> Iterator for IntoIter<T, V> {
	type Item = (Interval<T>, V);
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
}

impl<T, V> Default for IntervalMap<T, V> {
	fn default() -> Self {
		IntervalMap {
			inner: BTreeMap::default(),
		}
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Interval, IntervalMap};

	impl<T, V> Serialize for IntervalMap<T, V>
	where
		T: Serialize,
		V: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for (interval, value) in self.iter() {
				seq.serialize_element(&(interval, value))?;
			}
			seq.end()
		}
	}

	impl<'de, T, V> Deserialize<'de> for IntervalMap<T, V>
	where
		T: PartialOrd + Deserialize<'de>,
		V: Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalMapVisitor {
				t: PhantomData,
				v: PhantomData,
			})
		}
	}

	struct IntervalMapVisitor<T, V> {
		t: PhantomData<T>,
		v: PhantomData<V>,
	}

	impl<'de, T, V> Visitor<'de> for IntervalMapVisitor<T, V>
	where
		T: PartialOrd + Deserialize<'de>,
		V: Deserialize<'de>,
	{
		type Value = IntervalMap<T, V>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an IntervalMap")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut map = IntervalMap::new();
			while let Some((interval, value)) =
				access.next_element::<(Interval<T>, V)>()?
			{
				map.insert(interval, value)
					.or(Err(serde::de::Error::custom("intervals overlap")))?;
			}
			Ok(map)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_intervals::{ee, ei, ie, ii, sc};

	fn basic() -> IntervalMap<f64, u8> {
		IntervalMap::from_slice_strict(basic_slice()).unwrap()
	}
	fn basic_slice() -> [(Interval<f64>, u8); 3] {
		[(ie(0.0, 1.0), 0), (ee(1.0, 2.0), 1), (ei(5.0, 6.0), 5)]
	}

	#[test]
	fn insert_tests() {
		assert_insert(
			basic(),
			(ie(1.0, 2.5), 2),
			Err(InsertError {
				interval: ie(1.0, 2.5),
				value: 2,
			}),
			basic_slice(),
		);
		assert_insert(
			basic(),
			(ii(-1.0, 0.0), 2),
			Err(InsertError {
				interval: ii(-1.0, 0.0),
				value: 2,
			}),
			basic_slice(),
		);
		assert_insert(
			basic(),
			(ii(-1.0, 7.0), 2),
			Err(InsertError {
				interval: ii(-1.0, 7.0),
				value: 2,
			}),
			basic_slice(),
		);
		assert_insert(
			basic(),
			(ie(-1.0, 0.0), 2),
			Ok(None),
			[
				(ie(-1.0, 0.0), 2),
				(ie(0.0, 1.0), 0),
				(ee(1.0, 2.0), 1),
				(ei(5.0, 6.0), 5),
			],
		);
		assert_insert(
			basic(),
			(sc(1.0), 2),
			Ok(None),
			[
				(ie(0.0, 1.0), 0),
				(sc(1.0), 2),
				(ee(1.0, 2.0), 1),
				(ei(5.0, 6.0), 5),
			],
		);
		assert_insert(
			basic(),
			(ii(2.0, 5.0), 2),
			Ok(None),
			[
				(ie(0.0, 1.0), 0),
				(ee(1.0, 2.0), 1),
				(ii(2.0, 5.0), 2),
				(ei(5.0, 6.0), 5),
			],
		);
		assert_insert(
			basic(),
			(ee(1.0, 2.0), 2),
			Ok(Some(1)),
			[(ie(0.0, 1.0), 0), (ee(1.0, 2.0), 2), (ei(5.0, 6.0), 5)],
		);
		// the key already in the map is kept
		assert_insert(
			basic(),
			(sc(5.5), 2),
			Ok(Some(5)),
			[(ie(0.0, 1.0), 0), (ee(1.0, 2.0), 1), (ei(5.0, 6.0), 2)],
		);
	}
	fn assert_insert<const N: usize>(
		mut before: IntervalMap<f64, u8>,
		to_insert: (Interval<f64>, u8),
		result: Result<Option<u8>, InsertError<f64, u8>>,
		after: [(Interval<f64>, u8); N],
	) {
		assert_eq!(before.insert(to_insert.0, to_insert.1), result);
		assert_eq!(
			before.into_iter().collect::<Vec<_>>(),
			after.into_iter().collect::<Vec<_>>()
		);
	}

	#[test]
	fn get_at_point_tests() {
		let map = basic();

		assert_eq!(map.get_at_point(0.0), Some(&0));
		assert_eq!(map.get_at_point(0.5), Some(&0));
		assert_eq!(map.get_at_point(1.0), None);
		assert_eq!(map.get_at_point(1.5), Some(&1));
		assert_eq!(map.get_at_point(2.0), None);
		assert_eq!(map.get_at_point(5.0), None);
		assert_eq!(map.get_at_point(6.0), Some(&5));
		assert_eq!(map.get_at_point(-3.0), None);
		assert_eq!(map.get_at_point(f64::NAN), None);

		assert_eq!(
			map.get_key_value_at_point(1.9),
			Some((&ee(1.0, 2.0), &1))
		);
		assert_eq!(map.contains_point(5.01), true);
		assert_eq!(map.contains_point(4.99), false);
	}

	#[test]
	fn get_at_point_mut_tests() {
		let mut map = basic();

		if let Some(value) = map.get_at_point_mut(0.25) {
			*value = 9;
		}

		assert_eq!(map.get(&ie(0.0, 1.0)), Ok(Some(&9)));
		assert_eq!(map.get_at_point_mut(3.0), None);
	}

	#[test]
	fn get_tests() {
		let map = basic();

		assert_eq!(map.get(&ee(1.0, 2.0)), Ok(Some(&1)));
		assert_eq!(map.get(&ii(2.0, 5.0)), Ok(None));
		assert_eq!(map.get(&ii(1.0, 2.0)), Err(OverlapError));
		assert_eq!(map.get(&ie(0.0, 2.0)), Err(OverlapError));
		assert_eq!(map.contains_key(&ei(5.0, 6.0)), Ok(true));
		assert_eq!(map.contains_key(&ee(6.0, 7.0)), Ok(false));
		assert_eq!(map.contains_key(&ii(6.0, 7.0)), Err(OverlapError));
	}

	#[test]
	fn scalar_keys_beside_interval_keys_tests() {
		let mut map =
			IntervalMap::from_slice_strict([(sc(2.0), 0), (ii(2.5, 3.0), 1)])
				.unwrap();

		assert_eq!(map.get(&ii(1.5, 2.7)), Err(OverlapError));
		assert_eq!(map.contains_key(&ee(1.0, 2.5)), Ok(true));
		assert_eq!(map.get(&ii(1.5, 2.4)), Ok(Some(&0)));
		assert_eq!(map.remove(&ii(1.5, 2.7)), Err(OverlapError));
		assert_insert(
			map.clone(),
			(ii(1.5, 2.7), 2),
			Err(InsertError {
				interval: ii(1.5, 2.7),
				value: 2,
			}),
			[(sc(2.0), 0), (ii(2.5, 3.0), 1)],
		);
		assert_insert(
			map.clone(),
			(ii(1.5, 2.4), 2),
			Ok(Some(0)),
			[(sc(2.0), 2), (ii(2.5, 3.0), 1)],
		);

		map.insert(sc(2.2), 3).unwrap();
		assert_eq!(map.get(&ii(1.5, 2.4)), Err(OverlapError));
		assert_eq!(map.get(&ii(1.5, 2.1)), Ok(Some(&0)));
		assert_eq!(map.get(&ee(2.2, 2.5)), Ok(None));
	}

	#[test]
	fn nan_point_tests() {
		let mut map =
			IntervalMap::from_slice_strict([(sc(1.0), 0), (ie(2.0, 3.0), 1)])
				.unwrap();

		assert_eq!(map.get_at_point(f64::NAN), None);
		assert_eq!(map.contains_point(f64::NAN), false);
		assert_eq!(map.get_at_point_mut(f64::NAN), None);
		assert_eq!(map.get(&Interval::scalar(f64::NAN)), Err(OverlapError));
		assert!(map.insert(Interval::scalar(f64::NAN), 9).is_err());
		assert_eq!(
			map.into_iter().collect::<Vec<_>>(),
			[(sc(1.0), 0), (ie(2.0, 3.0), 1)]
		);
	}

	#[test]
	fn remove_tests() {
		let mut map = basic();

		assert_eq!(map.remove(&ii(0.5, 1.5)), Err(OverlapError));
		assert_eq!(map.len(), 3);

		assert_eq!(map.remove(&ii(3.0, 4.0)), Ok(None));
		assert_eq!(map.remove(&ee(1.0, 2.0)), Ok(Some(1)));
		assert_eq!(map.remove(&sc(5.5)), Ok(Some(5)));

		assert_eq!(
			map.into_iter().collect::<Vec<_>>(),
			[(ie(0.0, 1.0), 0)]
		);
	}

	#[test]
	fn first_and_last_tests() {
		let map = basic();

		assert_eq!(map.first_key_value(), Some((&ie(0.0, 1.0), &0)));
		assert_eq!(map.last_key_value(), Some((&ei(5.0, 6.0), &5)));
		assert_eq!(IntervalMap::<f64, u8>::new().first_key_value(), None);
	}

	#[test]
	fn iter_tests() {
		let mut map = basic();

		for (interval, value) in map.iter_mut() {
			if *interval == ee(1.0, 2.0) {
				*value = 10;
			}
		}

		assert_eq!(
			map.iter().rev().map(|(_, value)| *value).collect::<Vec<_>>(),
			[5, 10, 0]
		);
	}

	#[test]
	fn many_entries_tests() {
		const COUNT: i32 = 50;
		let spaced = |i: i32| ie(f64::from(2 * i), f64::from(2 * i + 1));

		// insert out of order so the tree has to rebalance
		let mut map = IntervalMap::new();
		for i in (0..COUNT).map(|i| (i * 7) % COUNT) {
			assert_eq!(map.insert(spaced(i), i), Ok(None));
		}
		assert_eq!(map.len(), 50);

		assert_eq!(
			map.iter().map(|(_, value)| *value).collect::<Vec<_>>(),
			(0..COUNT).collect::<Vec<_>>()
		);

		for i in 0..COUNT {
			assert_eq!(map.get_at_point(f64::from(2 * i) + 0.5), Some(&i));
			assert_eq!(map.get_at_point(f64::from(2 * i + 1)), None);

			let inside = ii(f64::from(2 * i) + 0.25, f64::from(2 * i) + 0.75);
			assert!(map.insert(inside, -1).is_err());
		}

		// the gaps between the existing entries all fit
		for i in 0..COUNT {
			let gap = ee(f64::from(2 * i + 1), f64::from(2 * i + 2));
			assert_eq!(map.insert(gap, COUNT + i), Ok(None));
		}
		assert_eq!(map.len(), 100);
		assert_eq!(map.get_at_point(f64::from(2 * COUNT - 1)), None);
		assert_eq!(map.get_at_point(1.5), Some(&COUNT));
	}

	#[test]
	fn from_iter_strict_tests() {
		assert_eq!(
			IntervalMap::from_iter_strict([
				(ii(0.0, 1.0), 0),
				(ii(1.0, 2.0), 1)
			]),
			Err(InsertError {
				interval: ii(1.0, 2.0),
				value: 1
			})
		);
	}

	#[test]
	fn insert_error_tests() {
		let error = InsertError {
			interval: ii(0.0, 1.0),
			value: 0,
		};
		assert!(std::error::Error::source(&error).is_some());
		assert_eq!(
			error.to_string(),
			"interval overlaps an interval already in the map"
		);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let map = basic();
		let json = serde_json::to_string(&map).unwrap();

		assert_eq!(
			serde_json::from_str::<IntervalMap<f64, u8>>(&json).unwrap(),
			map
		);

		let overlapping = r#"[
			[{"lower_bound":0,"lower_inclusive":true,"upper_bound":2,"upper_inclusive":true},0],
			[{"lower_bound":1,"lower_inclusive":true,"upper_bound":3,"upper_inclusive":true},1]
		]"#;
		assert!(serde_json::from_str::<IntervalMap<i32, u8>>(overlapping)
			.is_err());
	}
}
