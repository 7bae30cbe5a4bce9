//! Waveform formulas and closed-form test signals.
//!
//! Everything here is pure math over [`Numeric`](crate::math::Numeric) values:
//! no state, no allocation outside the test-signal buffers. The waveform
//! functions accept either numbers or expressions (see [`waveform::Phase`]).

/// Phase wrapping and phase units.
pub mod phase;
/// Jaehne and swept chirps.
pub mod test_signal;
/// Periodic waveforms and the dual eager/lazy front end.
pub mod waveform;

pub use phase::{wrap, Cycles, PhaseUnit, Radians, Raw, Units};
pub use test_signal::{
    jaehne, jaehne_expr, swept, swept_expr, try_jaehne, try_swept, TestSignal,
};
pub use waveform::{
    function_name, isawtooth, isawtoothnorm, rawisawtooth, rawsawtooth, rawsine, rawsquare,
    rawtriangle, sawtooth, sawtoothnorm, sine, sinenorm, square, squarenorm, triangle,
    trianglenorm, wave, InverseSawtooth, Phase, Sawtooth, Shape, Sine, Square, Triangle,
    WaveFn, WaveFunction, Waveform,
};
