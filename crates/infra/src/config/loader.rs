//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Load a `.env` file into the process environment, if one exists
//! 2. Use environment variables when `JOBBOARD_API_URL` is set
//! 3. Otherwise probe for a config file (JSON or TOML)
//! 4. Otherwise fall back to built-in defaults
//!
//! ## Environment Variables
//! - `JOBBOARD_API_URL`: API base URL including the version prefix (required)
//! - `JOBBOARD_API_TIMEOUT`: Request timeout in seconds
//! - `JOBBOARD_USER_AGENT`: User-Agent header value
//! - `JOBBOARD_STORAGE_BACKEND`: `memory` or `keychain`
//! - `JOBBOARD_KEYCHAIN_SERVICE`: Keychain service name
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` and `./jobboard.{json,toml}`
//! 2. The same names in the parent directory
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use jobboard_domain::{ApiConfig, ClientConfig, JobBoardError, Result, StorageBackend, StorageConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "jobboard.json", "jobboard.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `JobBoardError::Config` if environment values are invalid or a
/// config file exists but cannot be parsed
pub fn load() -> Result<ClientConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    if std::env::var_os("JOBBOARD_API_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No configuration source found, using defaults");
            Ok(ClientConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `JOBBOARD_API_URL` is required; every other variable falls back to its
/// default when unset.
///
/// # Errors
/// Returns `JobBoardError::Config` if the base URL is missing or a value
/// cannot be parsed
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = env_var("JOBBOARD_API_URL")?;

    let timeout_seconds = optional_env_var("JOBBOARD_API_TIMEOUT")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| JobBoardError::Config(format!("Invalid API timeout: {e}")))
        })
        .transpose()?;

    let backend = optional_env_var("JOBBOARD_STORAGE_BACKEND")
        .map(|s| s.parse::<StorageBackend>().map_err(JobBoardError::Config))
        .transpose()?
        .unwrap_or_default();

    let defaults = StorageConfig::default();

    Ok(ClientConfig {
        api: ApiConfig {
            base_url,
            timeout_seconds,
            user_agent: optional_env_var("JOBBOARD_USER_AGENT"),
        },
        storage: StorageConfig {
            backend,
            service_name: optional_env_var("JOBBOARD_KEYCHAIN_SERVICE")
                .unwrap_or(defaults.service_name),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `JobBoardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(JobBoardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            JobBoardError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| JobBoardError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration by file extension (`.json` or `.toml`)
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| JobBoardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| JobBoardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(JobBoardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        JobBoardError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-blank
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 5] = [
        "JOBBOARD_API_URL",
        "JOBBOARD_API_TIMEOUT",
        "JOBBOARD_USER_AGENT",
        "JOBBOARD_STORAGE_BACKEND",
        "JOBBOARD_KEYCHAIN_SERVICE",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        clear_env();

        std::env::set_var("JOBBOARD_API_URL", "https://jobs.example.com/api/v1");
        std::env::set_var("JOBBOARD_API_TIMEOUT", "20");
        std::env::set_var("JOBBOARD_USER_AGENT", "jobboard-desktop/1.0");
        std::env::set_var("JOBBOARD_STORAGE_BACKEND", "Keychain");
        std::env::set_var("JOBBOARD_KEYCHAIN_SERVICE", "JobBoard.test");

        let result = load_from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api/v1");
        assert_eq!(config.api.timeout_seconds, Some(20));
        assert_eq!(config.api.user_agent.as_deref(), Some("jobboard-desktop/1.0"));
        assert_eq!(config.storage.backend, StorageBackend::Keychain);
        assert_eq!(config.storage.service_name, "JobBoard.test");
    }

    #[test]
    fn test_load_from_env_defaults_optional_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        clear_env();

        std::env::set_var("JOBBOARD_API_URL", "http://127.0.0.1:5000/api/v1");
        std::env::set_var("JOBBOARD_USER_AGENT", "   ");

        let result = load_from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.timeout_seconds, None);
        assert_eq!(config.api.user_agent, None);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_load_from_env_missing_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, JobBoardError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        clear_env();

        std::env::set_var("JOBBOARD_API_URL", "http://localhost:5000/api/v1");
        std::env::set_var("JOBBOARD_API_TIMEOUT", "soon");
        let timeout_result = load_from_env();

        std::env::set_var("JOBBOARD_API_TIMEOUT", "10");
        std::env::set_var("JOBBOARD_STORAGE_BACKEND", "cookies");
        let backend_result = load_from_env();
        clear_env();

        assert!(matches!(timeout_result, Err(JobBoardError::Config(_))));
        assert!(matches!(backend_result, Err(JobBoardError::Config(message)) if message.contains("cookies")));
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "api": { "base_url": "https://jobs.example.com/api/v1", "timeout_seconds": 30 },
            "storage": { "backend": "keychain" }
        }"#;

        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();

        let config = load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "https://jobs.example.com/api/v1");
        assert_eq!(config.api.timeout_seconds, Some(30));
        assert_eq!(config.storage.backend, StorageBackend::Keychain);
        assert_eq!(config.storage.service_name, "JobBoard.session");
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[api]
base_url = "https://staging.jobs.example.com/api/v1"
user_agent = "jobboard-staging"

[storage]
backend = "memory"
"#;

        let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "https://staging.jobs.example.com/api/v1");
        assert_eq!(config.api.user_agent.as_deref(), Some("jobboard-staging"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(JobBoardError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        temp_file.write_all(br#"{ "this is": "not valid json" "#).unwrap();

        let result = load_from_file(Some(temp_file.path().to_path_buf()));
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_parse_config_empty_toml_uses_defaults() {
        let config = parse_config("", Path::new("jobboard.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
