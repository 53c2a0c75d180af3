use seek_common::observability::LogFormat;
use seek_config::{SERPER_API_KEY_ENV, SeekConfigLoader, TAVILY_API_KEY_ENV};
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_file_with_env_interpolation() {
    let tmp = TempDir::new().unwrap();
    let file_yaml = r#"
serper:
  api_key: "${TEST_SERPER_TOKEN}"
  endpoint: "http://localhost:9001"
tavily:
  endpoint: "http://localhost:9002"
  timeout_secs: 90
http:
  timeout_secs: 15
logging:
  format: json
  filter: "seek=debug"
"#;
    let p = write_yaml(&tmp, "seek.yaml", file_yaml);

    temp_env::with_vars(
        [
            ("TEST_SERPER_TOKEN", Some("serper-from-file")),
            (SERPER_API_KEY_ENV, Some("ignored-because-file-wins")),
            (TAVILY_API_KEY_ENV, Some("tvly-from-env")),
        ],
        || {
            let config = SeekConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config");

            assert_eq!(config.serper.api_key.as_deref(), Some("serper-from-file"));
            assert_eq!(config.serper.endpoint.as_deref(), Some("http://localhost:9001"));
            assert_eq!(config.serper.timeout_secs, Some(15));

            assert_eq!(config.tavily.api_key.as_deref(), Some("tvly-from-env"));
            assert_eq!(config.tavily.timeout_secs, Some(90));

            assert_eq!(config.logging.format, LogFormat::Json);
            assert_eq!(config.logging.filter.as_deref(), Some("seek=debug"));
        },
    );
}

#[test]
#[serial]
fn missing_credentials_stay_unset() {
    temp_env::with_vars(
        [(SERPER_API_KEY_ENV, None::<&str>), (TAVILY_API_KEY_ENV, None)],
        || {
            let config = SeekConfigLoader::new()
                .with_yaml_str("tavily:\n  api_key: \"${UNSET_TAVILY_PLACEHOLDER}\"")
                .load()
                .expect("load config");

            assert!(config.serper.api_key.is_none());
            assert!(config.tavily.api_key.is_none());
        },
    );
}

#[test]
#[serial]
fn env_overlay_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "seek.yaml",
        "tavily:\n  endpoint: \"http://from-file\"\n",
    );

    temp_env::with_vars(
        [
            ("SEEK__TAVILY__ENDPOINT", Some("http://from-env")),
            ("SEEK__HTTP__TIMEOUT_SECS", Some("7")),
        ],
        || {
            let config = SeekConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config");

            assert_eq!(config.tavily.endpoint.as_deref(), Some("http://from-env"));
            assert_eq!(config.tavily.timeout_secs, Some(7));
        },
    );
}

#[test]
#[serial]
fn optional_file_may_be_absent() {
    let tmp = TempDir::new().unwrap();
    let config = SeekConfigLoader::new()
        .with_optional_file(tmp.path().join("missing.yaml"))
        .load()
        .expect("absent optional file is fine");

    assert!(config.serper.endpoint.is_none());
}

#[test]
#[serial]
fn required_file_must_exist() {
    let tmp = TempDir::new().unwrap();
    let result = SeekConfigLoader::new()
        .with_file(tmp.path().join("missing.yaml"))
        .load();

    assert!(result.is_err());
}
