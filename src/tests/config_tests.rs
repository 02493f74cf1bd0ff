//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{table::TableConfig, ConfigLoader, KaulaConfig, Validate};
use crate::data_structures::kaula_hash_map::HashStrategy;
use crate::error::config::ConfigError;
use crate::tests::test_utils::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KaulaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.table.capacity, 2_500);
    assert_eq!(config.table.hash_function, HashStrategy::PositionWeighted);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KaulaConfig::default();

    config.table.capacity = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.table.capacity = 16;
    config.word_count.top = 0;
    assert!(config.validate().is_err());

    config.word_count.top = 3;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "kaula.toml",
            r#"
            [table]
            capacity = 31
            hash_function = "fnv"

            [word_count]
            top = 4
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "KAULA_TEST_FILE").load().unwrap();
    assert_eq!(config.table.capacity, 31);
    assert_eq!(config.table.hash_function, HashStrategy::Fnv);
    assert_eq!(config.word_count.top, 4);

    // Untouched sections keep their defaults
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("kaula.json", r#"{ "table": { "hash_function": "additive" } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "KAULA_TEST_JSON").load().unwrap();
    assert_eq!(config.table.hash_function, HashStrategy::Additive);
    assert_eq!(config.table.capacity, TableConfig::default().capacity);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("KAULA_TEST_ENV__TABLE__CAPACITY", "97");
    fixture.set_env("KAULA_TEST_ENV__WORD_COUNT__TOP", "2");

    let config = ConfigLoader::new(None::<&str>, "KAULA_TEST_ENV").load().unwrap();
    assert_eq!(config.table.capacity, 97);
    assert_eq!(config.word_count.top, 2);
}

/// Test that an invalid value in the file fails validation.
#[test]
fn test_invalid_file_value_is_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("zero.toml", "[table]\ncapacity = 0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "KAULA_TEST_ZERO").load();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
}

/// Test the errors for missing and unsupported files.
#[test]
fn test_missing_and_unsupported_files() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    let result = ConfigLoader::new(Some(&missing), "KAULA_TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let ini = fixture.create_file("kaula.ini", "capacity=3").unwrap();
    let result = ConfigLoader::new(Some(&ini), "KAULA_TEST_INI").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let toml = toml::to_string_pretty(&KaulaConfig::default()).unwrap();
    assert!(toml.contains("hash_function = \"position_weighted\""));

    let parsed: KaulaConfig = toml::from_str(&toml).unwrap();
    assert_eq!(parsed.table.capacity, 2_500);
}
