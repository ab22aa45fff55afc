use incident_console::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "incident-console";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "INCIDENT_SERVER__PORT",
            "INCIDENT_ANALYSIS__BASE_URL",
            "INCIDENT_UPLOAD__MAX_BYTES",
            "CONFIG_FILE",
            "HOST",
            "PORT",
            "API_BASE_URL",
            "TIMEOUT_DISABLED",
        ] {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.analysis.base_url, "http://localhost:8000");
    assert_eq!(config.analysis.timeout_secs, 150);
    assert_eq!(config.upload.max_bytes, 1_000_000);
    assert!(!config.server.timeout_disabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("INCIDENT_SERVER__PORT", "9090");
        env::set_var("INCIDENT_UPLOAD__MAX_BYTES", "2048");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.upload.max_bytes, 2048);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("INCIDENT_SERVER__PORT", "9090");
        env::set_var("API_BASE_URL", "http://from-env:8000");
    }

    let config = AppConfig::load_from_args([
        BIN,
        "--port",
        "4000",
        "--api-base-url",
        "http://analysis.internal:9000",
        "--timeout-disabled",
        "true",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.analysis.base_url, "http://analysis.internal:9000");
    assert!(config.server.timeout_disabled);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_env_fallback() {
    clear_env_vars();
    unsafe {
        env::set_var("API_BASE_URL", "http://from-env:8000");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.analysis.base_url, "http://from-env:8000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
analysis:
  base_url: "http://analysis.example:8000/svc"
workspace:
  idle_timeout_secs: 60
"#
    )
    .expect("Failed to write temp config");

    let path = file.path().to_string_lossy().to_string();
    let config = AppConfig::load_from_args([BIN, "--config", path.as_str()])
        .expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.analysis.base_url, "http://analysis.example:8000/svc");
    assert_eq!(config.workspace.idle_timeout_secs, 60);
    // Untouched keys keep their defaults.
    assert_eq!(config.analysis.transcript_path, "/api/v1/transcript");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    // Clean up before asserting so a failure doesn't leave the file behind
    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
