use super::{f32x8, f64x4, Numeric, Real};

macro_rules! impl_scalar {
    ($($ty:ident => $wide:ident;)*) => {$(
        impl Numeric for $ty {
            type Scalar = $ty;

            const LANES: usize = 1;

            #[inline]
            fn splat(value: $ty) -> Self {
                value
            }

            #[inline]
            fn from_fn<F: FnMut(usize) -> $ty>(mut f: F) -> Self {
                f(0)
            }

            #[inline]
            fn lane(self, index: usize) -> $ty {
                assert_eq!(index, 0, "scalar has a single lane");
                self
            }

            #[inline]
            fn store(self, out: &mut [$ty]) {
                out[0] = self;
            }

            #[inline]
            fn floor(self) -> Self {
                $ty::floor(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }

            #[inline]
            fn select_lt(self, rhs: Self, if_true: Self, if_false: Self) -> Self {
                if self < rhs {
                    if_true
                } else {
                    if_false
                }
            }

            #[inline]
            fn select_ge(self, rhs: Self, if_true: Self, if_false: Self) -> Self {
                if self >= rhs {
                    if_true
                } else {
                    if_false
                }
            }

            #[inline]
            fn sin(self) -> Self {
                $ty::sin(self)
            }
        }

        impl Real for $ty {
            type Wide = $wide;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_scalar! {
    f32 => f32x8;
    f64 => f64x4;
}
