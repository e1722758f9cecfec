// stderr logging for the binaries; stdout carries only payload bytes.
//
// Verbosity comes from RUST_LOG (e.g. RUST_LOG=kyber_payloads=debug), default "warn".

use std::sync::Once;

use env_logger::{Builder, Env, Target};

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let _ = Builder::from_env(Env::default().default_filter_or("warn"))
            .target(Target::Stderr)
            .format_timestamp_micros()
            .try_init();
    });
}

/// Test variant: captured by the test harness, never panics on re-init.
pub fn init_test() {
    let _ = Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
