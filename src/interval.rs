use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

use crate::error::{IntervalError, Result};

/// Bound type of every [`Interval`].
pub type Integer = i64;

/// A closed integer interval `[min, max]`.
///
/// `min <= max` holds for every value of this type: constructing from reversed
/// bounds swaps them, and [`Interval::set_max`] refuses to go below `min`.
/// Single-point intervals (`min == max`) are valid.
///
/// Equality compares both bounds. Intervals are ordered by `min` alone, which
/// does not agree with equality, so the ordering is offered as
/// [`Interval::cmp_by_min`] rather than through `PartialOrd`.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize), serde(from = "RawInterval"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    min: Integer,
    max: Integer,
}

// Deserialization goes through `Interval::new` so reversed bounds get swapped.
#[cfg(feature="serde")]
#[derive(Deserialize)]
struct RawInterval {
    min: Integer,
    max: Integer,
}

#[cfg(feature="serde")]
impl From<RawInterval> for Interval {
    fn from(raw: RawInterval) -> Self {
        Interval::new(raw.min, raw.max)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl From<RangeInclusive<Integer>> for Interval {
    fn from(range: RangeInclusive<Integer>) -> Self {
        let (a, b) = range.into_inner();
        Interval::new(a, b)
    }
}

impl Interval {
    /// Creates the interval spanning `a` and `b`, in whichever order they come.
    ///
    /// ```
    /// use interval_cover::Interval;
    ///
    /// let interval = Interval::new(7, -3);
    /// assert_eq!((interval.min(), interval.max()), (-3, 7));
    /// ```
    pub fn new(a: Integer, b: Integer) -> Interval {
        if b < a {
            Interval { min: b, max: a }
        } else {
            Interval { min: a, max: b }
        }
    }

    /// Creates the single-point interval `[value, value]`.
    pub fn point(value: Integer) -> Interval {
        Interval {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> Integer {
        self.min
    }

    pub fn max(&self) -> Integer {
        self.max
    }

    /// Moves the upper bound to `max`.
    ///
    /// Fails with [`IntervalError::InvalidBound`] if `max` is below the current
    /// lower bound. Setting it equal to the lower bound is allowed.
    pub fn set_max(&mut self, max: Integer) -> Result<()> {
        if max < self.min {
            return Err(IntervalError::InvalidBound {
                min: self.min,
                requested: max,
            });
        }

        self.max = max;
        Ok(())
    }

    pub fn contains_point(&self, value: Integer) -> bool {
        self.min <= value && value <= self.max
    }

    /// Orders intervals by their lower bound only.
    ///
    /// Two intervals sharing a lower bound compare `Equal` even if their upper
    /// bounds differ.
    pub fn cmp_by_min(&self, other: &Interval) -> Ordering {
        self.min.cmp(&other.min)
    }
}
