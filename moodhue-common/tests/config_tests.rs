//! Configuration and root folder resolution tests
//!
//! Tests that manipulate MOODHUE_ROOT_FOLDER or MOODHUE_ROOT are marked with
//! #[serial] so they never race each other on the process environment.

use moodhue_common::config::{
    CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig, DATABASE_FILE_NAME,
    ENV_ROOT, ENV_ROOT_FOLDER,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(ENV_ROOT_FOLDER);
    env::remove_var(ENV_ROOT);
}

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert!(defaults.root_folder.ends_with("moodhue") || defaults.root_folder.ends_with("moodhue_data"));
    assert_eq!(defaults.log_level, "info");
    assert_eq!(defaults.port, 8000);
    assert_eq!(defaults.bind_address, "127.0.0.1");
}

#[test]
#[serial]
fn test_resolver_missing_config_uses_default() {
    clear_env();

    // A module name that will never have a config file
    let resolver = RootFolderResolver::new("nonexistent-test-module-12345");
    let root_folder = resolver.resolve();

    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);
}

#[test]
#[serial]
fn test_resolver_env_var_root_folder() {
    clear_env();
    env::set_var(ENV_ROOT_FOLDER, "/tmp/moodhue-test-env-folder");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/moodhue-test-env-folder"));

    clear_env();
}

#[test]
#[serial]
fn test_resolver_env_var_root() {
    clear_env();
    env::set_var(ENV_ROOT, "/tmp/moodhue-test-env-root");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/moodhue-test-env-root"));

    clear_env();
}

#[test]
#[serial]
fn test_root_folder_var_takes_precedence() {
    clear_env();
    env::set_var(ENV_ROOT_FOLDER, "/tmp/moodhue-priority-1");
    env::set_var(ENV_ROOT, "/tmp/moodhue-priority-2");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/moodhue-priority-1"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_override_beats_environment() {
    clear_env();
    env::set_var(ENV_ROOT_FOLDER, "/tmp/moodhue-from-env");

    let root_folder = RootFolderResolver::new("test-module")
        .with_cli_override(Some(PathBuf::from("/tmp/moodhue-from-cli")))
        .resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/moodhue-from-cli"));

    clear_env();
}

#[test]
fn test_initializer_database_path() {
    let root = PathBuf::from("/tmp/moodhue-test-root");
    let initializer = RootFolderInitializer::new(root.clone());

    assert_eq!(initializer.database_path(), root.join(DATABASE_FILE_NAME));
}

#[test]
fn test_initializer_database_missing() {
    let dir = TempDir::new().unwrap();
    let initializer = RootFolderInitializer::new(dir.path().join("empty"));

    assert!(!initializer.database_exists());
}

#[test]
fn test_initializer_creates_directory_idempotently() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let initializer = RootFolderInitializer::new(root.clone());

    assert!(initializer.ensure_directory_exists().is_ok());
    assert!(initializer.ensure_directory_exists().is_ok());
    assert!(root.is_dir());
}

#[test]
fn test_toml_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("moodhue-api.toml");
    std::fs::write(
        &path,
        r#"
root_folder = "/srv/moodhue"
port = 8123
bind_address = "0.0.0.0"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/moodhue")));
    assert_eq!(config.port, 8123);
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.logging.level, "debug");
    assert!(!config.translator.enabled);
}

#[test]
fn test_toml_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = TomlConfig::load(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(moodhue_common::Error::Io(_))));
}
