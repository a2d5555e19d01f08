//! Unit tests for logging setup

use stockscope::logging::{init_logging, is_production};

#[test]
fn test_is_production() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
    assert!(!is_production(""));
}

#[test]
fn test_init_logging_installs_subscriber() {
    init_logging();
    tracing::info!(check = "logging", "subscriber installed");
}
