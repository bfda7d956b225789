use std::io;

use jester_core::oracle::ask;
use jester_core::source_from_seed;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut rng = source_from_seed(seed);
    let stdin = io::stdin();
    let stdout = io::stdout();

    ask(&mut stdin.lock(), &mut stdout.lock(), &mut rng)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
