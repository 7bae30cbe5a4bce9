//! Periodic waveform formulas and their eager/lazy call sites.

/*
Periodic Waveforms
==================

Five shapes, each available at three phase units:

    shape              raw (canonical)   cycles           radians
    ----------------   ---------------   --------------   -----------
    sine               rawsine           sinenorm         sine
    square             rawsquare         squarenorm       square
    sawtooth           rawsawtooth       sawtoothnorm     sawtooth
    inverse sawtooth   rawisawtooth      isawtoothnorm    isawtooth
    triangle           rawtriangle       trianglenorm     triangle

The three forms always agree:

    radians(x) == cycles(x / 2π) == raw(wrap(x / 2π))

Shapes Over One Cycle
---------------------

  p:          0      0.25     0.5      0.75     1
  sine        0   →  +1   →   0    →   -1   →   0
  square     +1      +1     -1 (at 0.5) -1      +1
  sawtooth   +1   →  0.5  →   0    →  -0.5  →  -1 (approached, never reached)
  isawtooth   0   →  0.5  →  -1    →  -0.5  →   0 (rising, half-cycle offset)
  triangle    0   →  +1   →   0    →   -1   →   0 (quarter-cycle offset)

Every shape stays within [-1, +1].

Eager vs Lazy
-------------

Each of the fifteen functions takes anything implementing `Phase<F>`:

  - a number (`f32`, `f64`, `f32x4`, `f32x8`, `f64x2`, `f64x4`): the value is
    computed on the spot and returned with the same type.
  - an `Expression`: nothing is computed; a `Wave` node wrapping the input is
    returned, to be composed further and rendered later.

Both paths run the same `WaveFunction::eval`, so rendering a node gives the
exact values the eager call would.

Anything else fails to compile. There is no implicit conversion.
*/

use std::{fmt, marker::PhantomData, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::phase::{wrap, Cycles, PhaseUnit, Radians, Raw, Units},
    error::Error,
    math::{f32x4, f32x8, f64x2, f64x4, Numeric, Real},
};

#[inline]
fn splat<N: Numeric>(value: f64) -> N {
    N::splat(N::Scalar::from_f64(value))
}

/// A waveform shape over canonical phase.
pub trait Shape: Copy + Default + Send + Sync + 'static {
    const WAVEFORM: Waveform;

    /// Amplitude at canonical phase `p`. `p` is expected in `[0, 1)` and is
    /// not re-validated.
    fn raw<N: Numeric>(p: N) -> N;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sawtooth;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InverseSawtooth;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triangle;

impl Shape for Sine {
    const WAVEFORM: Waveform = Waveform::Sine;

    /// `sin(2π·p)` through the fast polynomial sine.
    #[inline]
    fn raw<N: Numeric>(p: N) -> N {
        (p * splat(std::f64::consts::TAU)).fast_sin()
    }
}

impl Shape for Square {
    const WAVEFORM: Waveform = Waveform::Square;

    /// `+1` below half a cycle, `-1` from `p == 0.5` on.
    #[inline]
    fn raw<N: Numeric>(p: N) -> N {
        p.select_lt(splat(0.5), splat(1.0), splat(-1.0))
    }
}

impl Shape for Sawtooth {
    const WAVEFORM: Waveform = Waveform::Sawtooth;

    #[inline]
    fn raw<N: Numeric>(p: N) -> N {
        splat::<N>(1.0) - splat::<N>(2.0) * p
    }
}

impl Shape for InverseSawtooth {
    const WAVEFORM: Waveform = Waveform::InverseSawtooth;

    #[inline]
    fn raw<N: Numeric>(p: N) -> N {
        splat::<N>(-1.0) + splat::<N>(2.0) * wrap(p + splat(0.5))
    }
}

impl Shape for Triangle {
    const WAVEFORM: Waveform = Waveform::Triangle;

    #[inline]
    fn raw<N: Numeric>(p: N) -> N {
        splat::<N>(1.0) - (splat::<N>(4.0) * wrap(p + splat(0.25)) - splat(2.0)).abs()
    }
}

/// Identity of one of the fifteen waveform functions.
pub trait WaveFunction: Copy + Default + Send + Sync + fmt::Debug + 'static {
    const WAVEFORM: Waveform;
    const UNITS: Units;

    fn eval<N: Numeric>(x: N) -> N;
}

/// A [`Shape`] driven by phase in a [`PhaseUnit`].
pub struct WaveFn<S, U>(PhantomData<(S, U)>);

impl<S, U> Clone for WaveFn<S, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, U> Copy for WaveFn<S, U> {}

impl<S, U> Default for WaveFn<S, U> {
    fn default() -> Self {
        WaveFn(PhantomData)
    }
}

impl<S: Shape, U: PhaseUnit> fmt::Debug for WaveFn<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(function_name(S::WAVEFORM, U::UNITS))
    }
}

impl<S: Shape, U: PhaseUnit> WaveFunction for WaveFn<S, U> {
    const WAVEFORM: Waveform = S::WAVEFORM;
    const UNITS: Units = U::UNITS;

    #[inline]
    fn eval<N: Numeric>(x: N) -> N {
        S::raw(U::canonical(x))
    }
}

/// Call-site capability: either evaluate `F` now or defer it.
///
/// Implemented for every concrete [`Numeric`] type (eager) and for every
/// [`Expression`](crate::graph::Expression) (lazy, see
/// [`Wave`](crate::graph::Wave)).
pub trait Phase<F: WaveFunction> {
    type Output;

    fn apply(self) -> Self::Output;
}

macro_rules! impl_eager_phase {
    ($($ty:ty),*) => {$(
        impl<F: WaveFunction> Phase<F> for $ty {
            type Output = $ty;

            #[inline]
            fn apply(self) -> $ty {
                F::eval(self)
            }
        }
    )*};
}

impl_eager_phase!(f32, f64, f32x4, f32x8, f64x2, f64x4);

/// Apply waveform function `F` to `x`, eagerly or lazily depending on `x`.
#[inline]
pub fn wave<F: WaveFunction, P: Phase<F>>(x: P) -> P::Output {
    x.apply()
}

macro_rules! wave_fns {
    ($($name:ident => $shape:ident, $unit:ident;)*) => {$(
        #[inline]
        pub fn $name<P: Phase<WaveFn<$shape, $unit>>>(x: P) -> P::Output {
            wave::<WaveFn<$shape, $unit>, P>(x)
        }
    )*};
}

wave_fns! {
    rawsine => Sine, Raw;
    sinenorm => Sine, Cycles;
    sine => Sine, Radians;
    rawsquare => Square, Raw;
    squarenorm => Square, Cycles;
    square => Square, Radians;
    rawsawtooth => Sawtooth, Raw;
    sawtoothnorm => Sawtooth, Cycles;
    sawtooth => Sawtooth, Radians;
    rawisawtooth => InverseSawtooth, Raw;
    isawtoothnorm => InverseSawtooth, Cycles;
    isawtooth => InverseSawtooth, Radians;
    rawtriangle => Triangle, Raw;
    trianglenorm => Triangle, Cycles;
    triangle => Triangle, Radians;
}

/// Runtime counterpart of the [`Shape`] types, for picking a waveform from
/// configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    #[cfg_attr(feature = "serde", serde(rename = "isawtooth"))]
    InverseSawtooth,
    Triangle,
}

impl Waveform {
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::InverseSawtooth,
        Waveform::Triangle,
    ];

    /// Amplitude at canonical phase `p`.
    pub fn raw<N: Numeric>(self, p: N) -> N {
        match self {
            Waveform::Sine => Sine::raw(p),
            Waveform::Square => Square::raw(p),
            Waveform::Sawtooth => Sawtooth::raw(p),
            Waveform::InverseSawtooth => InverseSawtooth::raw(p),
            Waveform::Triangle => Triangle::raw(p),
        }
    }

    /// Amplitude at phase `x` expressed in `units`.
    pub fn eval<N: Numeric>(self, units: Units, x: N) -> N {
        self.raw(units.canonical(x))
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::InverseSawtooth => "isawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .into_iter()
            .find(|waveform| waveform.name() == s)
            .ok_or_else(|| Error::UnknownName {
                kind: "waveform",
                name: s.to_string(),
            })
    }
}

/// Public function name for a waveform at the given units.
pub fn function_name(waveform: Waveform, units: Units) -> &'static str {
    match (waveform, units) {
        (Waveform::Sine, Units::Raw) => "rawsine",
        (Waveform::Sine, Units::Cycles) => "sinenorm",
        (Waveform::Sine, Units::Radians) => "sine",
        (Waveform::Square, Units::Raw) => "rawsquare",
        (Waveform::Square, Units::Cycles) => "squarenorm",
        (Waveform::Square, Units::Radians) => "square",
        (Waveform::Sawtooth, Units::Raw) => "rawsawtooth",
        (Waveform::Sawtooth, Units::Cycles) => "sawtoothnorm",
        (Waveform::Sawtooth, Units::Radians) => "sawtooth",
        (Waveform::InverseSawtooth, Units::Raw) => "rawisawtooth",
        (Waveform::InverseSawtooth, Units::Cycles) => "isawtoothnorm",
        (Waveform::InverseSawtooth, Units::Radians) => "isawtooth",
        (Waveform::Triangle, Units::Raw) => "rawtriangle",
        (Waveform::Triangle, Units::Cycles) => "trianglenorm",
        (Waveform::Triangle, Units::Radians) => "triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn square_boundaries() {
        assert_eq!(rawsquare(0.0f64), 1.0);
        assert_eq!(rawsquare(0.25f64), 1.0);
        assert_eq!(rawsquare(0.5f64), -1.0);
        assert_eq!(rawsquare(0.999f32), -1.0);
        assert_eq!(squarenorm(-0.75f64), 1.0);
        assert_eq!(square(PI + 0.01), -1.0);
    }

    #[test]
    fn sawtooth_boundaries() {
        assert_eq!(rawsawtooth(0.0f64), 1.0);
        assert_eq!(rawsawtooth(0.5f64), 0.0);
        let near_end = rawsawtooth(1.0f64 - 1e-12);
        assert!(near_end > -1.0 && near_end < -1.0 + 1e-11);
        assert_eq!(sawtoothnorm(3.0f64), 1.0);
    }

    #[test]
    fn inverse_sawtooth_carries_half_cycle_offset() {
        assert_eq!(rawisawtooth(0.0f64), 0.0);
        assert_eq!(rawisawtooth(0.25f64), 0.5);
        assert_eq!(rawisawtooth(0.5f64), -1.0);
        assert_eq!(rawisawtooth(0.75f64), -0.5);
        assert_eq!(isawtoothnorm(-0.25f64), -0.5);
    }

    #[test]
    fn triangle_peaks_at_quarter_cycle() {
        assert_eq!(trianglenorm(0.0f64), 0.0);
        assert_eq!(trianglenorm(0.25f64), 1.0);
        assert_eq!(trianglenorm(0.5f64), 0.0);
        assert_eq!(trianglenorm(0.75f64), -1.0);
        assert_eq!(rawtriangle(0.125f32), 0.5);
    }

    #[test]
    fn sine_matches_libm() {
        for i in 0..64 {
            let p = i as f64 / 64.0;
            assert_abs_diff_eq!(rawsine(p), (TAU * p).sin(), epsilon = 1e-9);
            assert_abs_diff_eq!(sine(p * 10.0 - 20.0), (p * 10.0 - 20.0).sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn three_forms_agree() {
        for waveform in Waveform::ALL {
            for i in -50..50 {
                let x = i as f64 * 0.173;
                let scaled = waveform.eval(Units::Radians, x);
                let norm = waveform.eval(Units::Cycles, x / TAU);
                let raw = waveform.raw(wrap(x / TAU));
                assert_abs_diff_eq!(scaled, norm, epsilon = 1e-12);
                assert_abs_diff_eq!(norm, raw, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn typed_functions_match_runtime_dispatch() {
        let x = 2.3f64;
        assert_eq!(sine(x), Waveform::Sine.eval(Units::Radians, x));
        assert_eq!(squarenorm(x), Waveform::Square.eval(Units::Cycles, x));
        assert_eq!(sawtooth(x), Waveform::Sawtooth.eval(Units::Radians, x));
        assert_eq!(isawtoothnorm(x), Waveform::InverseSawtooth.eval(Units::Cycles, x));
        assert_eq!(triangle(x), Waveform::Triangle.eval(Units::Radians, x));
        assert_eq!(rawtriangle(0.3f64), Waveform::Triangle.raw(0.3f64));
    }

    #[test]
    fn periodic_in_whole_cycles() {
        for waveform in Waveform::ALL {
            for i in 0..40 {
                let x = i as f64 * 0.0371 - 0.5;
                for k in [-7.0, -1.0, 1.0, 3.0, 1000.0] {
                    let a = waveform.eval(Units::Cycles, x);
                    let b = waveform.eval(Units::Cycles, x + k);
                    assert_abs_diff_eq!(a, b, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn amplitude_bounded() {
        for waveform in Waveform::ALL {
            for units in [Units::Cycles, Units::Radians] {
                for i in -2000..2000 {
                    let x = i as f32 * 0.0917;
                    let y = waveform.eval(units, x);
                    assert!((-1.0..=1.0).contains(&y), "{waveform:?} {units:?} {x}: {y}");
                }
            }
        }
    }

    #[test]
    fn vector_lanes_match_scalar() {
        let input = [-3.3f32, -0.5, 0.0, 0.25, 0.5, 0.9, 4.2, 1e4];
        let v = trianglenorm(f32x8::from(input));
        let s = sine(f32x8::from(input));
        for (i, &x) in input.iter().enumerate() {
            assert_eq!(v.lane(i).to_bits(), trianglenorm(x).to_bits());
            assert_eq!(s.lane(i).to_bits(), sine(x).to_bits());
        }

        let input = [-1.75f64, 0.5];
        let v = isawtoothnorm(f64x2::from(input));
        assert_eq!(v.lane(0), isawtoothnorm(input[0]));
        assert_eq!(v.lane(1), isawtoothnorm(input[1]));
    }

    #[test]
    fn nan_propagates() {
        for waveform in Waveform::ALL {
            if waveform == Waveform::Square {
                continue;
            }
            assert!(waveform.eval(Units::Cycles, f64::NAN).is_nan(), "{waveform:?}");
        }
    }

    #[test]
    fn generic_entry_point_matches_named_function() {
        assert_eq!(wave::<WaveFn<Sawtooth, Radians>, _>(1.25f64), sawtooth(1.25f64));
        assert_eq!(wave::<WaveFn<Square, Raw>, _>(0.75f32), rawsquare(0.75f32));
    }

    #[test]
    fn names_round_trip() {
        for waveform in Waveform::ALL {
            assert_eq!(waveform.name().parse::<Waveform>().unwrap(), waveform);
        }
        assert!("noise".parse::<Waveform>().is_err());
        assert_eq!(format!("{:?}", WaveFn::<Triangle, Cycles>::default()), "trianglenorm");
    }
}
