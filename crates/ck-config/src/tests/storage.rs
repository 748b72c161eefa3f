use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_storage_config_when_validated_then_ok() {
    let config = StorageConfig::default();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_empty_file_when_validated_then_error() {
    let config = StorageConfig {
        file: String::new(),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_absolute_path_when_validated_then_error() {
    let config = StorageConfig {
        file: String::from("/etc/storage.json"),
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_parent_traversal_when_validated_then_error() {
    let config = StorageConfig {
        file: String::from("../storage.json"),
    };

    assert_that!(config.validate(), err(anything()));
}
