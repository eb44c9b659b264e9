//! Runtime tuning for the parallel 2-D path (`parallel` feature).
//!
//! The threshold is the number of matrix elements at or above which
//! [`ComplexFft2d`](crate::fft2d::ComplexFft2d) spreads its row and column
//! passes across rayon workers. Resolution order: the value passed to
//! [`set_parallel_2d_threshold`], then the `FFTSERVER_PAR_2D_THRESHOLD`
//! environment variable (read once), then [`DEFAULT_PARALLEL_2D_THRESHOLD`].

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Environment variable consulted when no override is set.
pub const PARALLEL_2D_THRESHOLD_ENV: &str = "FFTSERVER_PAR_2D_THRESHOLD";

/// Elements per matrix below which the serial path is used.
pub const DEFAULT_PARALLEL_2D_THRESHOLD: usize = 1 << 14;

/// `0` means no override.
static PARALLEL_2D_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_2D_THRESHOLD_ENV_VALUE: OnceLock<usize> = OnceLock::new();

fn env_threshold() -> usize {
    *PARALLEL_2D_THRESHOLD_ENV_VALUE.get_or_init(|| {
        std::env::var(PARALLEL_2D_THRESHOLD_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_2D_THRESHOLD)
    })
}

/// Override the parallel 2-D threshold. Passing `0` reverts to the
/// environment variable or the built-in default.
pub fn set_parallel_2d_threshold(elements: usize) {
    PARALLEL_2D_THRESHOLD_OVERRIDE.store(elements, Ordering::Relaxed);
}

/// The threshold currently in effect.
pub fn parallel_2d_threshold() -> usize {
    match PARALLEL_2D_THRESHOLD_OVERRIDE.load(Ordering::Relaxed) {
        0 => env_threshold(),
        t => t,
    }
}

pub(crate) fn should_parallelize_2d(elements: usize) -> bool {
    elements >= parallel_2d_threshold()
}
