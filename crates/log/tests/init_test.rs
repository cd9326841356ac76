//! Global subscriber installation. Kept in its own test binary because a
//! process can only install one global subscriber.

use intake_log::{Config, LogError, init_with};

#[test]
fn installs_once() {
    let invalid = init_with(Config::test().with_level("intake=loud"));
    assert!(matches!(invalid, Err(LogError::Filter(_))));

    let guard = init_with(Config::test().with_service("intake-test"));
    assert!(guard.is_ok());
    tracing::info!("logger installed");

    let second = init_with(Config::test());
    assert!(matches!(second, Err(LogError::Init(_))));
}
