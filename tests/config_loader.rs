use leavedesk::config::{Config, ConfigError, LayoutKind};
use leavedesk::store::{PersistLayout, SliceKey};
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert!(config.persistence.enabled);
    assert_eq!(config.persistence.layout, LayoutKind::WholeTree);
    assert_eq!(config.persistence.root_key, "root");
    assert_eq!(config.persistence.whitelist, SliceKey::all().to_vec());
    assert!(config.storage.data_dir.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("leavedesk/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parses_per_slice_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[storage]
data_dir = "/tmp/leavedesk-test"

[persistence]
layout = "per_slice"
whitelist = ["users", "session"]
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.data_dir(), std::path::PathBuf::from("/tmp/leavedesk-test"));
    let options = config.persistence.to_options();
    assert_eq!(options.layout, PersistLayout::PerSlice);
    assert_eq!(options.whitelist, vec![SliceKey::Users, SliceKey::Session]);
}

#[test]
fn test_unknown_slice_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[persistence]\nwhitelist = [\"payroll\"]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_bad_root_key_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[persistence]\nroot_key = \"../state\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_duplicate_whitelist_fails_validation() {
    let mut config = Config::default();
    config.persistence.whitelist = vec![SliceKey::Users, SliceKey::Users];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("listed twice"));
}

#[test]
fn test_whole_tree_options_use_root_key() {
    let mut config = Config::default();
    config.persistence.root_key = "state".to_string();
    assert_eq!(
        config.persistence.to_options().layout,
        PersistLayout::WholeTree {
            key: "state".to_string()
        }
    );
}
