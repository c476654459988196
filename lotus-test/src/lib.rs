//! Test setup and shared test vectors for the Lotus miner fund crates.
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod prelude;
pub mod vectors;

static INIT: Once = Once::new();

/// Stack frames from the test runner and proptest, hidden from error reports.
const HIDDEN_FRAMES: &[&str] = &[
    "std::panic",
    "core::ops::function::FnOnce::call_once",
    "test::run_test_in_process",
    "test::assert_test_result",
    "proptest::",
];

/// Installs the tracing subscriber and the error report hooks for tests.
///
/// Only the first call in each test binary does anything, so every test can call it.
///
/// Logs go to the test output. Set `RUST_LOG` to change the default `warn` filter,
/// for example `RUST_LOG=lotus_consensus=trace` to see the payout rule of each block.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn"))
            .expect("the default log filter is valid");

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_test_writer())
            .with(ErrorLayer::default())
            .init();

        color_eyre::config::HookBuilder::default()
            .add_frame_filter(Box::new(|frames| {
                frames.retain(|frame| {
                    frame.name.as_ref().map_or(true, |name| {
                        !HIDDEN_FRAMES.iter().any(|hidden| name.starts_with(hidden))
                    })
                })
            }))
            .install()
            .expect("error report hooks are only installed once");
    })
}
