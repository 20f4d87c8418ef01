//! Tests for configuration loading.

use super::{
    AUTH_LATENCY_MS_VAR, BoardConfig, ConfigError, LOGIN_FAILURE_MARKER_VAR, SEED_ON_START_VAR,
    SIGNUP_CONFLICT_MARKER_VAR,
};
use rstest::rstest;
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|&(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[rstest]
fn unset_variables_yield_defaults() {
    let config = BoardConfig::from_lookup(lookup_from(&[])).expect("defaults load");

    assert_eq!(config, BoardConfig::default());
    assert!(config.seed_on_start);
    assert_eq!(config.auth.latency, Duration::from_millis(750));
    assert_eq!(config.auth.login_failure_marker.as_str(), "fail");
    assert_eq!(config.auth.signup_conflict_marker.as_str(), "taken");
}

#[rstest]
fn variables_override_defaults() {
    let config = BoardConfig::from_lookup(lookup_from(&[
        (SEED_ON_START_VAR, "off"),
        (AUTH_LATENCY_MS_VAR, " 20 "),
        (LOGIN_FAILURE_MARKER_VAR, " DENY "),
        (SIGNUP_CONFLICT_MARKER_VAR, "exists"),
    ]))
    .expect("overrides load");

    assert!(!config.seed_on_start);
    assert_eq!(config.auth.latency, Duration::from_millis(20));
    assert_eq!(config.auth.login_failure_marker.as_str(), "deny");
    assert_eq!(config.auth.signup_conflict_marker.as_str(), "exists");
}

#[rstest]
#[case(SEED_ON_START_VAR, "maybe")]
#[case(AUTH_LATENCY_MS_VAR, "-5")]
#[case(AUTH_LATENCY_MS_VAR, "soon")]
#[case(LOGIN_FAILURE_MARKER_VAR, "   ")]
#[case(SIGNUP_CONFLICT_MARKER_VAR, "")]
fn invalid_values_are_rejected(#[case] name: &str, #[case] value: &str) {
    let result = BoardConfig::from_lookup(lookup_from(&[(name, value)]));
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue(name.to_owned(), value.to_owned()))
    );
}

#[rstest]
fn presets_adjust_single_concerns() {
    assert_eq!(BoardConfig::instant().auth.latency, Duration::ZERO);
    assert!(BoardConfig::instant().seed_on_start);
    assert!(!BoardConfig::empty().seed_on_start);
}

#[rstest]
fn partial_json_falls_back_to_defaults() {
    let config: BoardConfig =
        serde_json::from_str(r#"{"seed_on_start": false}"#).expect("deserialize config");
    assert!(!config.seed_on_start);
    assert_eq!(config.auth, BoardConfig::default().auth);
}

#[rstest]
#[case(r#"{"auth": {"login_failure_marker": ""}}"#)]
#[case(r#"{"auth": {"latency": 0, "signup_conflict_marker": "   "}}"#)]
fn blank_json_markers_are_rejected(#[case] json: &str) {
    assert!(serde_json::from_str::<BoardConfig>(json).is_err());
}

#[rstest]
fn json_markers_are_normalized() {
    let config: BoardConfig =
        serde_json::from_str(r#"{"auth": {"login_failure_marker": " Deny "}}"#)
            .expect("deserialize config");
    assert_eq!(config.auth.login_failure_marker.as_str(), "deny");
    assert_eq!(config.auth.signup_conflict_marker.as_str(), "taken");
}
