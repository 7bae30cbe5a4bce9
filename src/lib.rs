//! Periodic waveforms and chirp test signals, evaluated eagerly on numbers or
//! lazily as expression-graph nodes.
//!
//! ```
//! use saavy_waveforms::{graph::{collect, linspace}, sine};
//!
//! let now = sine(1.0f64);
//! let later = sine(linspace(0.0f64, 2.0, 3, true));
//! assert_eq!(collect(&later, 3)[1], now);
//! ```

pub mod config;
pub mod dsp; // Waveform formulas and test signals
pub mod error;
pub mod graph; // Lazy expression graphs
pub mod math;

pub use config::{SignalConfig, SignalKind};
pub use dsp::{
    isawtooth, isawtoothnorm, jaehne, rawisawtooth, rawsawtooth, rawsine, rawsquare, rawtriangle,
    sawtooth, sawtoothnorm, sine, sinenorm, square, squarenorm, swept, triangle, trianglenorm,
    try_jaehne, try_swept, TestSignal, Units, Waveform,
};
pub use error::{Error, Result};
