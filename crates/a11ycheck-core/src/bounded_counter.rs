//! Bounded admission counter.
//!
//! Guards capture, recursive descent and file loads against unbounded or
//! adversarial input sizes. Not thread-safe: callers serialize access.
//!
//! `count` mirrors successful admissions and never exceeds `upper_bound`.
//! `attempts` keeps climbing past the bound (up to `i32::MAX`) so callers can
//! tell how far over the limit an input was.

use serde::Serialize;

use crate::errors::{A11yError, ExError};

/// Upper bound on some admission-style operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    upper_bound: i32,
    count: i32,
    attempts: i32,
}

/// Point-in-time copy of a counter's state, for reports and persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterState {
    pub upper_bound: i32,
    pub count: i32,
    pub attempts: i32,
    pub upper_bound_exceeded: bool,
}

impl BoundedCounter {
    /// Create a counter with the given bound
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `upper_bound <= 0` or `upper_bound == i32::MAX`
    /// (the maximum is reserved so overflow detection stays exact).
    pub fn new(upper_bound: i32) -> Result<Self, ExError> {
        if upper_bound <= 0 {
            return Err(A11yError::UpperBoundNotPositive { upper_bound }.into());
        }

        if upper_bound == i32::MAX {
            return Err(A11yError::UpperBoundAtIntMax.into());
        }

        Ok(Self {
            upper_bound,
            count: 0,
            attempts: 0,
        })
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// Successful admissions since the last reset (never exceeds the bound)
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Admission attempts since the last reset (may exceed the bound)
    pub fn attempts(&self) -> i32 {
        self.attempts
    }

    pub fn upper_bound_exceeded(&self) -> bool {
        self.attempts > self.upper_bound
    }

    /// Attempt to admit one more item
    ///
    /// Returns `true` iff the item fits under the bound. Once saturated at
    /// `i32::MAX` attempts the counter stops mutating.
    pub fn try_increment(&mut self) -> bool {
        if self.attempts == i32::MAX {
            return false;
        }

        self.attempts += 1;
        if self.attempts > self.upper_bound {
            return false;
        }

        self.count = self.attempts;
        true
    }

    /// Attempt to admit `value` items at once
    ///
    /// Equivalent to `value` calls to [`try_increment`](Self::try_increment),
    /// except that on failure `count` is clamped to the bound.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    pub fn try_add(&mut self, value: i32) -> bool {
        assert!(value >= 0, "value to add must not be negative, got {value}");

        let Some(attempts) = self.attempts.checked_add(value) else {
            self.attempts = i32::MAX;
            self.count = self.upper_bound;
            return false;
        };

        self.attempts = attempts;
        if self.attempts > self.upper_bound {
            self.count = self.upper_bound;
            return false;
        }

        self.count = self.attempts;
        true
    }

    /// Zero `count` and `attempts`; the bound is fixed for the counter's lifetime
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.count = 0;
    }

    pub fn state(&self) -> CounterState {
        CounterState {
            upper_bound: self.upper_bound,
            count: self.count,
            attempts: self.attempts,
            upper_bound_exceeded: self.upper_bound_exceeded(),
        }
    }
}
