use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use namesweep::config::load_config;
///
/// let config = load_config(Path::new("sweep.toml")).unwrap();
/// println!("Endpoint: {}", config.api.endpoint);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ApiVersion;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[api]
endpoint = "http://35.200.185.69:8000/v1/autocomplete"
version = "v1"

[crawl]
max-depth = 6
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api.version, ApiVersion::V1);
        assert_eq!(config.api.effective_page_cap(), 50);
        assert_eq!(config.api.effective_rate_budget(), 100);
        assert_eq!(config.crawl.max_depth, 6);
        // Defaults kick in for fields the file omits
        assert_eq!(config.crawl.max_retries, 5);
        assert_eq!(config.crawl.throttle_cooldown_secs, 60);
        assert!(config.output.names_path.is_none());
    }

    #[test]
    fn test_load_config_with_overrides() {
        let config_content = r#"
[api]
endpoint = "http://localhost:8000/v3/autocomplete"
version = "v3"
page-cap = 10
rate-budget = 600

[crawl]
max-depth = 2
max-retries = 1
throttle-cooldown-secs = 0

[output]
names-path = "./names.txt"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api.version, ApiVersion::V3);
        assert_eq!(config.api.effective_page_cap(), 10);
        assert_eq!(config.api.effective_rate_budget(), 600);
        assert_eq!(config.crawl.throttle_cooldown_secs, 0);
        assert_eq!(config.output.names_path.as_deref(), Some("./names.txt"));
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/sweep.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_unknown_version() {
        let config_content = r#"
[api]
endpoint = "http://localhost:8000/v4/autocomplete"
version = "v4"

[crawl]
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[api]
endpoint = "http://localhost:8000/v1/autocomplete"
version = "v1"

[crawl]
max-depth = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
