//! wavegen - print a waveform or test signal, one sample per line
//!
//! Run with: cargo run --bin wavegen -- --signal swept --length 256

mod args;

use color_eyre::eyre::WrapErr;
use saavy_waveforms::{dsp::test_signal::checked_length, SignalConfig};
use std::io::{self, BufWriter, Write};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = args::parse();

    let length = checked_length(args.length)?;
    let mut config = SignalConfig::new(args.signal)
        .magnitude(args.magnitude)
        .length(length);
    if let Some(units) = args.units {
        config = config.units(units);
    }
    if let Some(cycles) = args.cycles {
        config = config.cycles(cycles);
    }

    let samples = config
        .render()
        .wrap_err_with(|| format!("failed to render {}", config.signal.name()))?;

    let mut out = BufWriter::new(io::stdout().lock());
    for sample in samples {
        writeln!(out, "{sample}")?;
    }
    out.flush()?;
    Ok(())
}
