//! Lane-wise numeric abstraction shared by the scalar and SIMD code paths.
//!
//! Every waveform formula in this crate is written once against [`Numeric`].
//! A plain `f32`/`f64` is a vector with a single lane; the `wide` types carry
//! two to eight lanes. Each operation is applied per lane with no cross-lane
//! dependency, so a SIMD evaluation always equals the scalar evaluation of each
//! of its lanes, bit for bit.

use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use num_traits::{FloatConst, One, Zero};

/// Polynomial sine approximation.
pub mod fast;
/// `Numeric` for `f32` and `f64`.
mod scalar;
/// `Numeric` for the `wide` vector types.
mod simd;

pub use fast::fast_sin;
pub use wide::{f32x4, f32x8, f64x2, f64x4};

/// A scalar or fixed-width vector of floats, operated on lane by lane.
pub trait Numeric:
    Copy
    + Send
    + Sync
    + fmt::Debug
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Element type of a single lane.
    type Scalar: Real;

    /// Number of lanes (1 for scalars).
    const LANES: usize;

    /// Broadcast `value` to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Build a value lane by lane, `f(0)` first.
    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// Read a single lane.
    ///
    /// # Panics
    /// Panics if `index >= Self::LANES`.
    fn lane(self, index: usize) -> Self::Scalar;

    /// Write every lane into `out`, which must be exactly `Self::LANES` long.
    fn store(self, out: &mut [Self::Scalar]);

    fn floor(self) -> Self;

    fn abs(self) -> Self;

    /// Branchless `if self < rhs { if_true } else { if_false }`, per lane.
    fn select_lt(self, rhs: Self, if_true: Self, if_false: Self) -> Self;

    /// Branchless `if self >= rhs { if_true } else { if_false }`, per lane.
    fn select_ge(self, rhs: Self, if_true: Self, if_false: Self) -> Self;

    /// Sine in radians, correctly rounded per the platform `libm`.
    fn sin(self) -> Self;

    /// Sine in radians through the polynomial in [`fast`].
    #[inline]
    fn fast_sin(self) -> Self {
        fast::fast_sin(self)
    }

    #[inline]
    fn sqr(self) -> Self {
        self * self
    }
}

/// Scalar element types (`f32`, `f64`).
///
/// A `Real` is its own one-lane [`Numeric`] and names the SIMD type the
/// evaluation driver uses for bulk rendering.
pub trait Real:
    Numeric<Scalar = Self> + PartialOrd + fmt::Display + Div<Output = Self> + FloatConst + Zero + One
{
    /// Widest vector type rendered per step by [`crate::graph::render`].
    type Wide: Numeric<Scalar = Self>;

    fn from_f64(value: f64) -> Self;

    fn from_usize(value: usize) -> Self;

    fn to_f64(self) -> f64;
}
