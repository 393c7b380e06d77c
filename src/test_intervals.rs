//! Short constructors for the `f64` intervals used throughout the tests.

use crate::Interval;

/// An included-included interval
pub fn ii(x1: f64, x2: f64) -> Interval<f64> {
	Interval::new(x1, true, x2, true).unwrap()
}
/// An included-excluded interval
pub fn ie(x1: f64, x2: f64) -> Interval<f64> {
	Interval::new(x1, true, x2, false).unwrap()
}
/// An excluded-included interval
pub fn ei(x1: f64, x2: f64) -> Interval<f64> {
	Interval::new(x1, false, x2, true).unwrap()
}
/// An excluded-excluded interval
pub fn ee(x1: f64, x2: f64) -> Interval<f64> {
	Interval::new(x1, false, x2, false).unwrap()
}
/// A scalar interval
pub fn sc(x: f64) -> Interval<f64> {
	Interval::scalar(x)
}
