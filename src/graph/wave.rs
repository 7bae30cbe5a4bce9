use std::marker::PhantomData;

use crate::{
    dsp::{
        phase::Units,
        waveform::{Phase, WaveFunction, Waveform},
    },
    graph::node::Expression,
    math::Numeric,
};

/// Deferred application of waveform function `F` to the phases in `E`.
///
/// Produced by calling any of the waveform functions on an expression. Reading
/// index `i` runs the same `F::eval` the eager call would, on the same phase,
/// so the values are identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave<F, E> {
    phase: E,
    func: PhantomData<F>,
}

impl<F: WaveFunction, E: Expression> Wave<F, E> {
    pub fn new(phase: E) -> Self {
        Self {
            phase,
            func: PhantomData,
        }
    }

    pub fn waveform(&self) -> Waveform {
        F::WAVEFORM
    }

    pub fn units(&self) -> Units {
        F::UNITS
    }

    pub fn phase(&self) -> &E {
        &self.phase
    }

    pub fn into_phase(self) -> E {
        self.phase
    }
}

impl<F: WaveFunction, E: Expression> Expression for Wave<F, E> {
    type Item = E::Item;

    fn size(&self) -> Option<usize> {
        self.phase.size()
    }

    #[inline]
    fn read<V: Numeric<Scalar = E::Item>>(&self, index: usize) -> V {
        F::eval(self.phase.read::<V>(index))
    }
}

impl<F: WaveFunction, E: Expression> Phase<F> for E {
    type Output = Wave<F, E>;

    #[inline]
    fn apply(self) -> Wave<F, E> {
        Wave::new(self)
    }
}
