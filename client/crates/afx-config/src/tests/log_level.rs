use crate::LogLevel;

use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn test_log_level_parses_known_names_case_insensitively() {
    assert_eq!(LogLevel::parse_lenient("WARN").0, LevelFilter::Warn);
    assert_eq!(LogLevel::parse_lenient("trace").0, LevelFilter::Trace);
    assert_eq!(LogLevel::parse_lenient(" off ").0, LevelFilter::Off);
}

#[test]
fn test_log_level_unknown_name_defaults_to_info() {
    assert_eq!(LogLevel::parse_lenient("verbose").0, LevelFilter::Info);
}

#[test]
fn test_log_level_deserializes_from_toml() {
    let wrapper: Wrapper = toml::from_str(r#"level = "error""#).unwrap();
    assert_eq!(*wrapper.level, LevelFilter::Error);
}
