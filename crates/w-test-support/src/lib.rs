//! Shared fixtures for testing the w export adapters
//!
//! Adapters are exercised against small static tables standing in for the
//! generated grammar, so tests run whether or not `parser.c` was generated.

pub mod fixtures;

pub use fixtures::{
    fixture_accessor, fixture_table_address, null_accessor, other_kind_external,
    secondary_accessor, OTHER_KIND_TAG_NAME,
};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness's captured writer
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
