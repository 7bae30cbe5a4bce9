//! Phase wrapping and the units a waveform's phase can be expressed in.

/*
Phase
=====

A periodic waveform only cares about where it is within one cycle. The
"canonical phase" is that position as a fraction of a cycle, in [0, 1).

  cycles     1.0 is one full period. 2.25 cycles == 0.25 canonical.
  radians    2π is one full period (conventional trig calling style).
  raw        Already canonical; passed through untouched.

Wrapping is "floor-style", not truncation toward zero, so negative phase
keeps running in the same direction:

    wrap( 1.25) = 0.25
    wrap(-0.25) = 0.75     (truncation would give -0.25)
    wrap(-1e-20) = 0.0     (x - floor(x) rounds up to 1.0; folded back to 0)
*/

use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, fmt, str::FromStr};

use crate::{
    error::Error,
    math::{Numeric, Real},
};

/// Map any phase (in cycles) to its canonical position in `[0, 1)`, per lane.
///
/// Non-finite input is not sanitized: NaN stays NaN and ±Inf becomes NaN.
#[inline]
pub fn wrap<N: Numeric>(x: N) -> N {
    let one = N::splat(N::Scalar::one());
    let fract = x - x.floor();
    fract.select_ge(one, N::splat(N::Scalar::zero()), fract)
}

/// Conversion from a unit of phase to canonical phase.
pub trait PhaseUnit: Copy + Default + Send + Sync + 'static {
    const UNITS: Units;

    fn canonical<N: Numeric>(x: N) -> N;
}

/// Phase that is already canonical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

/// Phase in cycles: one period per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cycles;

/// Phase in radians: one period per 2π.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Radians;

impl PhaseUnit for Raw {
    const UNITS: Units = Units::Raw;

    #[inline]
    fn canonical<N: Numeric>(x: N) -> N {
        x
    }
}

impl PhaseUnit for Cycles {
    const UNITS: Units = Units::Cycles;

    #[inline]
    fn canonical<N: Numeric>(x: N) -> N {
        wrap(x)
    }
}

impl PhaseUnit for Radians {
    const UNITS: Units = Units::Radians;

    #[inline]
    fn canonical<N: Numeric>(x: N) -> N {
        Cycles::canonical(x * N::splat(N::Scalar::from_f64(1.0 / TAU)))
    }
}

/// Runtime counterpart of the [`PhaseUnit`] types.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    Raw,
    Cycles,
    #[default]
    Radians,
}

impl Units {
    pub fn canonical<N: Numeric>(self, x: N) -> N {
        match self {
            Units::Raw => Raw::canonical(x),
            Units::Cycles => Cycles::canonical(x),
            Units::Radians => Radians::canonical(x),
        }
    }

    /// Length of one full period in these units.
    pub fn period(self) -> f64 {
        match self {
            Units::Raw | Units::Cycles => 1.0,
            Units::Radians => TAU,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Units::Raw => "raw",
            Units::Cycles => "cycles",
            Units::Radians => "radians",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Units::Raw),
            "cycles" | "norm" => Ok(Units::Cycles),
            "radians" | "rad" => Ok(Units::Radians),
            _ => Err(Error::UnknownName {
                kind: "units",
                name: s.to_string(),
            }),
        }
    }
}
