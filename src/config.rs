//! Runtime description of a signal to generate.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{phase::Units, test_signal::TestSignal, waveform::Waveform},
    error::{Error, Result},
    graph::{collect, linspace},
};

/// Which signal to produce.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", tag = "kind"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalKind {
    /// One of the closed-form chirps.
    Test { signal: TestSignal },
    /// `cycles` periods of a waveform, phase running from 0 in `units`.
    Periodic {
        waveform: Waveform,
        units: Units,
        cycles: f64,
    },
}

impl SignalKind {
    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Test { signal } => signal.name(),
            SignalKind::Periodic { waveform, .. } => waveform.name(),
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = Error;

    /// Test-signal names map to [`SignalKind::Test`]; waveform names map to
    /// one radian-phase cycle of that waveform.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(signal) = s.parse::<TestSignal>() {
            return Ok(SignalKind::Test { signal });
        }
        match s.parse::<Waveform>() {
            Ok(waveform) => Ok(SignalKind::Periodic {
                waveform,
                units: Units::default(),
                cycles: 1.0,
            }),
            Err(_) => Err(Error::UnknownName {
                kind: "signal",
                name: s.to_string(),
            }),
        }
    }
}

/// A signal plus its amplitude and length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalConfig {
    pub signal: SignalKind,
    pub magnitude: f64,
    pub length: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            signal: SignalKind::Test {
                signal: TestSignal::Jaehne,
            },
            magnitude: 1.0,
            length: 64,
        }
    }
}

impl SignalConfig {
    pub fn new(signal: SignalKind) -> Self {
        Self {
            signal,
            ..Self::default()
        }
    }

    pub fn test(signal: TestSignal) -> Self {
        Self::new(SignalKind::Test { signal })
    }

    /// One cycle of `waveform` with phase in radians.
    pub fn periodic(waveform: Waveform) -> Self {
        Self::new(SignalKind::Periodic {
            waveform,
            units: Units::default(),
            cycles: 1.0,
        })
    }

    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the phase units of a periodic signal. Ignored for test signals.
    pub fn units(mut self, new_units: Units) -> Self {
        match &mut self.signal {
            SignalKind::Periodic { units, .. } => *units = new_units,
            SignalKind::Test { signal } => {
                log::warn!("units ignored for test signal {}", signal.name())
            }
        }
        self
    }

    /// Set how many periods a periodic signal spans. Ignored for test signals.
    pub fn cycles(mut self, new_cycles: f64) -> Self {
        match &mut self.signal {
            SignalKind::Periodic { cycles, .. } => *cycles = new_cycles,
            SignalKind::Test { signal } => {
                log::warn!("cycles ignored for test signal {}", signal.name())
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        finite("magnitude", self.magnitude)?;
        if let SignalKind::Periodic { units, cycles, .. } = self.signal {
            finite("cycles", cycles)?;
            if units == Units::Raw && !(0.0..=1.0).contains(&cycles) {
                return Err(Error::RawPhaseOutOfRange(cycles));
            }
        }
        Ok(())
    }

    /// Validate and produce `length` samples.
    pub fn render(&self) -> Result<Vec<f64>> {
        self.validate()?;
        log::debug!(
            "rendering {} ({} samples, magnitude {})",
            self.signal.name(),
            self.length,
            self.magnitude
        );

        let samples = match self.signal {
            SignalKind::Test { signal } => signal.generate(self.magnitude, self.length),
            SignalKind::Periodic {
                waveform,
                units,
                cycles,
            } => {
                let span = cycles * units.period();
                let mut phases = collect(&linspace(0.0, span, self.length, false), self.length);
                for sample in &mut phases {
                    *sample = self.magnitude * waveform.eval(units, *sample);
                }
                phases
            }
        };
        Ok(samples)
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteParameter { name, value })
    }
}
