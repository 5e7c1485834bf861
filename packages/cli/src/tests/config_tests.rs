use crate::config::{Config, ConfigError, OutputFormat};
use rstest::rstest;
use serial_test::serial;
use std::collections::HashMap;
use std::env;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.log_filter, "warn");
    assert_eq!(config.output, OutputFormat::Table);
    assert!(!config.strict_validation);
}

#[test]
fn test_config_all_custom() {
    let config = Config::from_lookup(lookup(&[
        ("ARCHITECT_LOG", "architect_engine=debug"),
        ("ARCHITECT_OUTPUT", "JSON"),
        ("ARCHITECT_STRICT_VALIDATION", "yes"),
    ]))
    .unwrap();

    assert_eq!(config.log_filter, "architect_engine=debug");
    assert_eq!(config.output, OutputFormat::Json);
    assert!(config.strict_validation);
}

#[test]
fn test_config_blank_log_filter_uses_default() {
    let config = Config::from_lookup(lookup(&[("ARCHITECT_LOG", "  ")])).unwrap();
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_config_invalid_output_format() {
    let result = Config::from_lookup(lookup(&[("ARCHITECT_OUTPUT", "yaml")]));

    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidOutputFormat("yaml".to_string())
    );
}

#[rstest]
#[case("true", true)]
#[case("1", true)]
#[case("ON", true)]
#[case("false", false)]
#[case("0", false)]
#[case("", false)]
fn test_config_strict_validation_values(#[case] value: &str, #[case] expected: bool) {
    let config =
        Config::from_lookup(lookup(&[("ARCHITECT_STRICT_VALIDATION", value)])).unwrap();
    assert_eq!(config.strict_validation, expected);
}

#[test]
fn test_config_invalid_strict_validation() {
    let result = Config::from_lookup(lookup(&[("ARCHITECT_STRICT_VALIDATION", "maybe")]));
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::InvalidBool { var: "ARCHITECT_STRICT_VALIDATION", .. }
    ));
}

#[test]
#[serial]
fn test_config_from_env() {
    env::set_var("ARCHITECT_OUTPUT", "json");
    env::remove_var("ARCHITECT_STRICT_VALIDATION");

    let config = Config::from_env().unwrap();

    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.strict_validation);

    env::remove_var("ARCHITECT_OUTPUT");
}
