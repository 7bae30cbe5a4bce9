//! Closed-form chirps used to check spectral processing.

/*
Test Signals
============

Both signals run a sine over a polynomial phase law. The ramp is
t[i] = i for i in [0, length), built with `linspace(0, length, length, false)`.

  jaehne   magnitude · sin( π/2 · t² / length )
           Quadratic phase: instantaneous frequency rises linearly from DC
           to half the sample rate across the buffer.

  swept    magnitude · sin( π/4 · (t² / length²)² · length )
           Quartic phase: stays near DC for most of the buffer and sweeps
           up steeply at the end.

    jaehne(1.0, 8):  0.000  0.195  0.707  0.981  0.000 ...
                     t=0 always gives sin(0) = 0.

Both are built as expression graphs (`jaehne_expr`, `swept_expr`) and
materialized by `jaehne`/`swept`. The sine here is the accurate one, not the
polynomial the periodic waveforms use.
*/

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    graph::{collect, linspace, ExprExt, Expression},
    math::Real,
};

/// Lazy form of [`jaehne`]: `length` samples, nothing computed yet.
pub fn jaehne_expr<T: Real>(magnitude: T, length: usize) -> impl Expression<Item = T> + Clone {
    let n = T::from_usize(length);
    linspace(T::zero(), n, length, false)
        .sqr()
        .scale(T::FRAC_PI_2() / n)
        .sin()
        .scale(magnitude)
}

/// Lazy form of [`swept`]: `length` samples, nothing computed yet.
pub fn swept_expr<T: Real>(magnitude: T, length: usize) -> impl Expression<Item = T> + Clone {
    let n = T::from_usize(length);
    linspace(T::zero(), n, length, false)
        .sqr()
        .scale(T::one() / (n * n))
        .sqr()
        .scale(T::FRAC_PI_4() * n)
        .sin()
        .scale(magnitude)
}

/// Quadratic-phase chirp, `magnitude · sin(π/2 · i² / length)`.
///
/// `length == 0` gives an empty buffer.
pub fn jaehne<T: Real>(magnitude: T, length: usize) -> Vec<T> {
    log::debug!("jaehne: {length} samples, magnitude {magnitude}");
    collect(&jaehne_expr(magnitude, length), length)
}

/// Quartic-phase chirp, `magnitude · sin(π/4 · (i² / length²)² · length)`.
///
/// `length == 0` gives an empty buffer.
pub fn swept<T: Real>(magnitude: T, length: usize) -> Vec<T> {
    log::debug!("swept: {length} samples, magnitude {magnitude}");
    collect(&swept_expr(magnitude, length), length)
}

/// [`jaehne`] with a signed length, rejecting negative values.
pub fn try_jaehne<T: Real>(magnitude: T, length: i64) -> Result<Vec<T>> {
    Ok(jaehne(magnitude, checked_length(length)?))
}

/// [`swept`] with a signed length, rejecting negative values.
pub fn try_swept<T: Real>(magnitude: T, length: i64) -> Result<Vec<T>> {
    Ok(swept(magnitude, checked_length(length)?))
}

/// Convert a signed sample count, rejecting negative values.
pub fn checked_length(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| Error::NegativeLength(length))
}

/// Runtime choice between the test signals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestSignal {
    #[default]
    Jaehne,
    Swept,
}

impl TestSignal {
    pub const ALL: [TestSignal; 2] = [TestSignal::Jaehne, TestSignal::Swept];

    pub fn generate<T: Real>(self, magnitude: T, length: usize) -> Vec<T> {
        match self {
            TestSignal::Jaehne => jaehne(magnitude, length),
            TestSignal::Swept => swept(magnitude, length),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TestSignal::Jaehne => "jaehne",
            TestSignal::Swept => "swept",
        }
    }
}

impl fmt::Display for TestSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestSignal {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TestSignal::ALL
            .into_iter()
            .find(|signal| signal.name() == s)
            .ok_or_else(|| Error::UnknownName {
                kind: "test signal",
                name: s.to_string(),
            })
    }
}
