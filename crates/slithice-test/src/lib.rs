//! slithice-test - Regression test framework for Slithice
//!
//! Provides a small regression harness modeled on the classic `regutils`
//! style: every check increments an index, failures are collected with
//! enough context to locate them, and [`RegParams::cleanup`] reports the
//! overall verdict.
//!
//! # Usage
//!
//! ```
//! use slithice_test::{RegParams, flat_gray};
//!
//! let mut rp = RegParams::new("doc");
//! let pix = flat_gray(4, 4, 100);
//! rp.compare_values(16.0, pix.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to log every check, anything else
//!   (or unset) runs in the default compare mode.
//! - `RUST_LOG`: Filter for the `tracing` events emitted by the engines,
//!   surfaced by [`init_tracing`].

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    checker_gray, flat_gray, gradient_gray, gray_from_fn, ramp_color, seeded_gray, try_gray_from_fn,
};
pub use params::{RegParams, RegTestMode};

/// Install a `tracing` subscriber writing to the test output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
