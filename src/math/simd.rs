use wide::{CmpGe, CmpLt};

use super::{f32x4, f32x8, f64x2, f64x4, Numeric};

// `floor` and `sin` go through the scalar routine lane by lane so a vector
// lane is always bit-identical to the scalar result.
macro_rules! impl_wide {
    ($($ty:ident: $scalar:ident x $lanes:literal;)*) => {$(
        impl Numeric for $ty {
            type Scalar = $scalar;

            const LANES: usize = $lanes;

            #[inline]
            fn splat(value: $scalar) -> Self {
                $ty::splat(value)
            }

            #[inline]
            fn from_fn<F: FnMut(usize) -> $scalar>(f: F) -> Self {
                $ty::from(core::array::from_fn::<$scalar, $lanes, F>(f))
            }

            #[inline]
            fn lane(self, index: usize) -> $scalar {
                self.to_array()[index]
            }

            #[inline]
            fn store(self, out: &mut [$scalar]) {
                out.copy_from_slice(&self.to_array());
            }

            #[inline]
            fn floor(self) -> Self {
                let lanes = self.to_array();
                Self::from_fn(|i| $scalar::floor(lanes[i]))
            }

            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }

            #[inline]
            fn select_lt(self, rhs: Self, if_true: Self, if_false: Self) -> Self {
                self.cmp_lt(rhs).blend(if_true, if_false)
            }

            #[inline]
            fn select_ge(self, rhs: Self, if_true: Self, if_false: Self) -> Self {
                self.cmp_ge(rhs).blend(if_true, if_false)
            }

            #[inline]
            fn sin(self) -> Self {
                let lanes = self.to_array();
                Self::from_fn(|i| $scalar::sin(lanes[i]))
            }
        }
    )*};
}

impl_wide! {
    f32x4: f32 x 4;
    f32x8: f32 x 8;
    f64x2: f64 x 2;
    f64x4: f64 x 4;
}
