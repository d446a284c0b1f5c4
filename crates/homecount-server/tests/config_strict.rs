#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use homecount_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
greeter:
  interval_mz: 5000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert!(cfg.probe.enabled);
    assert_eq!(cfg.probe.url, "https://api.ipify.org?format=json");
    assert_eq!(cfg.greeter.interval_ms, 60000);
    assert_eq!(cfg.greeter.message, "Hello!");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:3000"
probe:
  enabled: false
  url: "http://127.0.0.1:9/"
greeter:
  interval_ms: 5000
  message: "good morning"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:3000");
    assert!(!cfg.probe.enabled);
    assert_eq!(cfg.greeter.interval_ms, 5000);
    assert_eq!(cfg.greeter.message, "good morning");
}

#[test]
fn rejects_unsupported_version() {
    let bad = "version: 2";
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn rejects_greeter_interval_out_of_range() {
    let bad = r#"
version: 1
greeter:
  interval_ms: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("greeter.interval_ms"));
}

#[test]
fn rejects_empty_greeter_message() {
    let bad = r#"
version: 1
greeter:
  message: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("greeter.message"));
}

#[test]
fn rejects_empty_probe_url() {
    let bad = r#"
version: 1
probe:
  url: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("probe.url"));
}
