use std::io;

use jester_core::dance::dance;
use jester_core::{JesterConfig, source_from_seed};

pub fn run(seed: Option<u64>, threshold: f64) -> Result<(), String> {
    let config = JesterConfig::default()
        .with_seed(seed)
        .with_stop_threshold(threshold);
    let mut rng = source_from_seed(config.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    Err(dance(&mut out, &mut rng, config.stop_threshold).to_string())
}
