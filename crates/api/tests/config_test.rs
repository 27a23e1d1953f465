use pawplan_api::config::{ApiConfig, parse_log_level};
use rstest::rstest;
use tracing::Level;

#[test]
fn test_server_addr() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        ..ApiConfig::default()
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}

#[test]
fn test_defaults() {
    let config = ApiConfig::default();
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout, 30);
    assert!(config.cors_origins.is_none());
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case(" warn ", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] raw: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(raw), expected);
}
