// tests/config_test.rs
use serial_test::serial;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use vtes::config::{load_settings, Settings, SETTINGS_FILE_NAME};
use vtes::VtesError;

/// Point the user config directory at an empty temp dir for the duration of a test.
fn isolated_config_home() -> TempDir {
    let home = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", home.path());
    home
}

#[test]
#[serial]
fn test_load_defaults_without_any_file() {
    let _home = isolated_config_home();
    let project = TempDir::new().unwrap();

    let settings = load_settings(None, project.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_custom_path() {
    let project = TempDir::new().unwrap();
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
tool_dir = ".vtes"
manifest = "meta.json"
poll_interval_ms = 200

[markers]
major = "!breaking"
minor = "feature"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let settings = load_settings(Some(temp_file.path()), project.path()).unwrap();
    assert_eq!(settings.tool_dir, ".vtes");
    assert_eq!(settings.manifest, "meta.json");
    assert_eq!(settings.poll_interval_ms, 200);
    assert_eq!(settings.markers.major, "!breaking");
    assert_eq!(settings.markers.minor, "feature");
    assert_eq!(settings.template_index, Settings::default().template_index);
}

#[test]
#[serial]
fn test_project_file_beats_user_file() {
    let home = isolated_config_home();
    fs::write(home.path().join(SETTINGS_FILE_NAME), "poll_interval_ms = 5\n").unwrap();

    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(SETTINGS_FILE_NAME),
        "poll_interval_ms = 50\n",
    )
    .unwrap();

    let settings = load_settings(None, project.path()).unwrap();
    assert_eq!(settings.poll_interval_ms, 50);
}

#[test]
#[serial]
fn test_user_file_used_when_project_has_none() {
    let home = isolated_config_home();
    fs::write(
        home.path().join(SETTINGS_FILE_NAME),
        "tool_dir = \"release-state\"\n",
    )
    .unwrap();
    let project = TempDir::new().unwrap();

    let settings = load_settings(None, project.path()).unwrap();
    assert_eq!(settings.tool_dir, "release-state");
    assert_eq!(settings.manifest, "package.json");
}

#[test]
fn test_fixture_file() {
    let project = TempDir::new().unwrap();
    let fixture = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/vtes.toml");

    let settings = load_settings(Some(fixture.as_path()), project.path()).unwrap();
    assert_eq!(settings.tool_dir, "perform-version-tests");
    assert_eq!(settings.poll_interval_ms, 500);
    assert_eq!(settings.markers.major, "BREAKING CHANGE");
    assert_eq!(settings.markers.minor, "feat:");
}

#[test]
fn test_malformed_file_is_settings_error() {
    let project = TempDir::new().unwrap();
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"poll_interval_ms = \"soon\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_settings(Some(temp_file.path()), project.path()).unwrap_err();
    assert!(matches!(err, VtesError::Settings(_)));
}

#[test]
fn test_missing_custom_path_is_settings_error() {
    let project = TempDir::new().unwrap();
    let missing = project.path().join("absent.toml");

    let err = load_settings(Some(missing.as_path()), project.path()).unwrap_err();
    assert!(matches!(err, VtesError::Settings(_)));
}
