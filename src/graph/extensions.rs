use crate::{
    dsp::waveform::WaveFunction,
    graph::{
        node::Expression,
        ops::{Offset, Product, Scale, Sin, Sqr},
        wave::Wave,
    },
};

pub trait ExprExt: Expression + Sized {
    fn scale(self, factor: Self::Item) -> Scale<Self> {
        Scale::new(self, factor)
    }

    fn offset(self, amount: Self::Item) -> Offset<Self> {
        Offset::new(self, amount)
    }

    fn product<E: Expression<Item = Self::Item>>(self, other: E) -> Product<Self, E> {
        Product::new(self, other)
    }

    fn sqr(self) -> Sqr<Self> {
        Sqr::new(self)
    }

    fn sin(self) -> Sin<Self> {
        Sin::new(self)
    }

    /// Treat this expression as phase for waveform function `F`.
    fn wave<F: WaveFunction>(self) -> Wave<F, Self> {
        Wave::new(self)
    }
}

impl<T: Expression> ExprExt for T {}
