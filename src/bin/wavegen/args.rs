use saavy_waveforms::{SignalKind, Units};

pub struct Args {
    pub signal: SignalKind,
    pub units: Option<Units>,
    pub cycles: Option<f64>,
    pub magnitude: f64,
    pub length: i64,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                signal = opt_opt::<SignalKind, _>("NAME", "signal")
                    .name('s')
                    .desc("jaehne, swept, sine, square, sawtooth, isawtooth or triangle")
                    .with_default(SignalKind::Test { signal: Default::default() });
                units = opt_opt::<Units, _>("UNITS", "units")
                    .name('u')
                    .desc("phase units of a periodic signal: raw, cycles or radians");
                cycles = opt_opt::<f64, _>("FLOAT", "cycles")
                    .name('c')
                    .desc("periods spanned by a periodic signal");
                magnitude = opt_opt::<f64, _>("FLOAT", "magnitude")
                    .name('m')
                    .with_default(1.0);
                length = opt_opt::<i64, _>("INT", "length")
                    .name('n')
                    .with_default(64);
            } in {
                Self {
                    signal,
                    units,
                    cycles,
                    magnitude,
                    length,
                }
            }
        }
    }
}

pub fn parse() -> Args {
    use meap::Parser;
    Args::parser().with_help_default().parse_env_or_exit()
}
