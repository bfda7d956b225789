use std::io;
use std::path::PathBuf;

use jester_core::voidchain::run_session;
use jester_core::{JesterConfig, source_from_seed};

pub fn run(seed: Option<u64>, dir: PathBuf, platform: Option<String>) -> Result<(), String> {
    let config = JesterConfig::default()
        .with_seed(seed)
        .with_output_dir(dir)
        .with_platform(platform);
    let mut rng = source_from_seed(config.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let path = run_session(&mut stdin.lock(), &mut stdout.lock(), &mut rng, &config)
        .map_err(|e| format!("voidchain failed: {e}"))?;

    tracing::info!(path = %path.display(), "session complete");
    Ok(())
}
