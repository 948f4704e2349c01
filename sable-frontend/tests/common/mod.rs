//! Shared helpers for the integration tests

#![allow(dead_code)]

use sable_frontend::{parse, Program};

/// Route `log` output through the test harness, filtered by `RUST_LOG`
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_ok(source: &str) -> Program {
    init_logging();
    match parse(source) {
        Ok(program) => program,
        Err(err) => panic!("failed to parse:\n{}\nerror: {}", source, err),
    }
}
