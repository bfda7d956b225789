//! Runtime configuration shared by the jester programs.

use std::path::PathBuf;

/// Default probability cut-off above which the thought printer stops.
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.9999;

/// Configuration for a jester run.
#[derive(Debug, Clone)]
pub struct JesterConfig {
    /// RNG seed for reproducible runs. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// The printer stops once a uniform draw exceeds this value (0-1).
    pub stop_threshold: f64,
    /// Directory that receives the voidchain file.
    pub output_dir: PathBuf,
    /// Platform identifier override. `None` detects the host.
    pub platform: Option<String>,
}

impl Default for JesterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            output_dir: PathBuf::from("."),
            platform: None,
        }
    }
}

impl JesterConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the stop threshold (clamped to 0-1).
    pub fn with_stop_threshold(mut self, threshold: f64) -> Self {
        self.stop_threshold = if threshold.is_nan() {
            DEFAULT_STOP_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the voidchain output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the detected platform identifier.
    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = platform;
        self
    }
}
