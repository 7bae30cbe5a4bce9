//! Leaf expressions: ramps, borrowed sample data and constants.

use crate::{
    graph::node::Expression,
    math::{Numeric, Real},
};

/// `count` evenly spaced values from `start` towards `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace<T> {
    start: T,
    step: T,
    count: usize,
}

/// Evenly spaced ramp over `[start, stop]` (`endpoint == true`) or
/// `[start, stop)` (`endpoint == false`).
///
/// Sample `i` is `start + i * step`, where `step` divides the span by
/// `count - 1` or `count` respectively.
pub fn linspace<T: Real>(start: T, stop: T, count: usize, endpoint: bool) -> Linspace<T> {
    let divisions = if endpoint {
        count.saturating_sub(1)
    } else {
        count
    };
    let step = if divisions == 0 {
        T::zero()
    } else {
        (stop - start) / T::from_usize(divisions)
    };
    Linspace { start, step, count }
}

impl<T: Real> Linspace<T> {
    pub fn step(&self) -> T {
        self.step
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self.start + T::from_usize(index) * self.step
    }
}

impl<T: Real> Expression for Linspace<T> {
    type Item = T;

    fn size(&self) -> Option<usize> {
        Some(self.count)
    }

    #[inline]
    fn read<V: Numeric<Scalar = T>>(&self, index: usize) -> V {
        V::from_fn(|lane| self.at(index + lane))
    }
}

/// Borrowed sample data as an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input<'a, T> {
    data: &'a [T],
}

pub fn input<T: Real>(data: &[T]) -> Input<'_, T> {
    Input { data }
}

impl<T: Real> Expression for Input<'_, T> {
    type Item = T;

    fn size(&self) -> Option<usize> {
        Some(self.data.len())
    }

    #[inline]
    fn read<V: Numeric<Scalar = T>>(&self, index: usize) -> V {
        V::from_fn(|lane| self.data[index + lane])
    }
}

/// The same value at every index, unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T> {
    value: T,
}

pub fn constant<T: Real>(value: T) -> Constant<T> {
    Constant { value }
}

impl<T: Real> Expression for Constant<T> {
    type Item = T;

    fn size(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn read<V: Numeric<Scalar = T>>(&self, _index: usize) -> V {
        V::splat(self.value)
    }
}
