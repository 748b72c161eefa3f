use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::remove("CK_API_URL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.storage.file, "storage.json");
}

#[test]
#[serial]
fn given_config_file_when_loaded_then_values_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("CK_API_URL");
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://api.example.test\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "https://api.example.test");
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn given_env_override_when_loaded_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://file.example.test\"\n",
    )
    .unwrap();
    let _url = EnvGuard::set("CK_API_URL", "https://env.example.test");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "https://env.example.test");
}

#[test]
#[serial]
fn given_defaults_when_validated_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::remove("CK_API_URL");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_malformed_toml_when_loaded_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_config_when_storage_path_resolved_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("CK_API_URL");

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert!(path.starts_with(temp.path()));
    assert!(path.ends_with("storage.json"));
}
