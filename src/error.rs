use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// The waveform and expression functions themselves are total and never
/// fail; only signed lengths, user-supplied parameters and names can be
/// rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("signal length must not be negative, got {0}")]
    NegativeLength(i64),

    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("raw phase must stay within one cycle, got {0} cycles")]
    RawPhaseOutOfRange(f64),

    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
