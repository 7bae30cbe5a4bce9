/*
Fast Sine
=========

`fast_sin` trades the last few bits of `libm` accuracy for a short chain of
multiplies, adds and selects that vectorizes cleanly.

  1. Range reduction: convert radians to turns, wrap into [-0.5, 0.5) and
     convert back, leaving y in [-π, π).
  2. Reflection: sin(π - y) == sin(y), so anything past ±π/2 is folded back
     into [-π/2, π/2] where the polynomial converges fastest.
  3. Odd Taylor polynomial through y^15, evaluated by Horner's rule in y².

Error Bounds
------------

On [-π/2, π/2] the first dropped term is y^17 / 17! ≈ 6e-12, so `f64` results
are within 1e-9 of `sin` for inputs of moderate magnitude (range reduction
loses absolute precision proportionally to |x|). `f32` results are limited by
`f32` rounding of the reduced argument, about 2e-6 for |x| <= 4.

The result is clamped to [-1, 1] so rounding never overshoots the amplitude
bound the waveform formulas promise.

NaN and ±Inf inputs come out as NaN.
*/

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Numeric, Real};
use crate::dsp::phase::wrap;

const FRAC_1_TAU: f64 = 1.0 / TAU;

// Taylor coefficients of sin(y)/y in y², highest order first.
const COEFFS: [f64; 8] = [
    -1.0 / 1_307_674_368_000.0,
    1.0 / 6_227_020_800.0,
    -1.0 / 39_916_800.0,
    1.0 / 362_880.0,
    -1.0 / 5_040.0,
    1.0 / 120.0,
    -1.0 / 6.0,
    1.0,
];

#[inline]
fn splat<N: Numeric>(value: f64) -> N {
    N::splat(N::Scalar::from_f64(value))
}

/// Approximate `sin(x)` for `x` in radians, per lane.
#[inline]
pub fn fast_sin<N: Numeric>(x: N) -> N {
    let half = splat::<N>(0.5);
    let turns = wrap(x * splat(FRAC_1_TAU) + half) - half;
    let y = turns * splat(TAU);

    let pi = splat::<N>(PI);
    let half_pi = splat::<N>(FRAC_PI_2);
    let neg_pi = splat::<N>(-PI);
    let neg_half_pi = splat::<N>(-FRAC_PI_2);
    let y = half_pi.select_lt(y, pi - y, y);
    let y = y.select_lt(neg_half_pi, neg_pi - y, y);

    let y2 = y * y;
    let poly = COEFFS[1..]
        .iter()
        .fold(splat::<N>(COEFFS[0]), |acc, &c| acc * y2 + splat(c));
    let result = poly * y;

    let one = splat::<N>(1.0);
    let neg_one = splat::<N>(-1.0);
    let result = one.select_lt(result, one, result);
    result.select_lt(neg_one, neg_one, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{f32x8, f64x4};

    #[test]
    fn tracks_libm_f64() {
        for i in -2000..=2000 {
            let x = i as f64 * 0.0123;
            let err = (fast_sin(x) - x.sin()).abs();
            assert!(err < 1e-9, "x = {x}: error {err}");
        }
    }

    #[test]
    fn tracks_libm_f32() {
        for i in -100..=100 {
            let x = i as f32 * 0.0371;
            let err = (fast_sin(x) - x.sin()).abs();
            assert!(err < 2e-6, "x = {x}: error {err}");
        }
    }

    #[test]
    fn exact_at_zero_and_bounded_at_peaks() {
        assert_eq!(fast_sin(0.0f64), 0.0);
        assert_eq!(fast_sin(0.0f32), 0.0);
        for x in [FRAC_PI_2, -FRAC_PI_2, 3.0 * FRAC_PI_2, 101.0 * FRAC_PI_2] {
            let y = fast_sin(x);
            assert!((-1.0..=1.0).contains(&y), "x = {x}: {y}");
            assert!((y.abs() - 1.0).abs() < 1e-9);
        }
        let y = fast_sin(std::f32::consts::FRAC_PI_2);
        assert!(y <= 1.0 && y > 0.999_999);
    }

    #[test]
    fn non_finite_becomes_nan() {
        assert!(fast_sin(f64::NAN).is_nan());
        assert!(fast_sin(f64::INFINITY).is_nan());
        assert!(fast_sin(f32::NEG_INFINITY).is_nan());
    }

    #[test]
    fn vector_lanes_match_scalar() {
        let input = [-7.5f32, -1.0, -0.1, 0.0, 0.3, 1.6, 3.0, 42.0];
        let v = fast_sin(f32x8::from(input));
        for (i, &x) in input.iter().enumerate() {
            assert_eq!(v.lane(i).to_bits(), fast_sin(x).to_bits());
        }

        let input = [-100.25f64, 0.5, 2.75, 1e3];
        let v = fast_sin(f64x4::from(input));
        for (i, &x) in input.iter().enumerate() {
            assert_eq!(v.lane(i).to_bits(), fast_sin(x).to_bits());
        }
    }
}
