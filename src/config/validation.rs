use crate::config::types::{ApiConfig, Config, CrawlConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_crawl_config(&config.crawl)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the endpoint configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.endpoint, e)))?;

    // The observed endpoints are plain http; both schemes are accepted
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "endpoint must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if let Some(page_cap) = config.page_cap {
        if page_cap < 1 {
            return Err(ConfigError::Validation(
                "page-cap must be >= 1".to_string(),
            ));
        }
    }

    if let Some(rate_budget) = config.rate_budget {
        if rate_budget < 1 {
            return Err(ConfigError::Validation(
                "rate-budget must be >= 1 call per minute".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates sweep behavior configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max-depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(
    config: &crate::config::types::OutputConfig,
) -> Result<(), ConfigError> {
    if let Some(path) = &config.names_path {
        if path.is_empty() {
            return Err(ConfigError::Validation(
                "names-path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ApiVersion, OutputConfig};

    fn create_test_config() -> Config {
        Config {
            api: ApiConfig {
                endpoint: "http://35.200.185.69:8000/v1/autocomplete".to_string(),
                version: ApiVersion::V1,
                page_cap: None,
                rate_budget: None,
            },
            crawl: CrawlConfig {
                max_depth: 6,
                max_retries: 5,
                throttle_cooldown_secs: 60,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_unparseable_endpoint_rejected() {
        let mut config = create_test_config();
        config.api.endpoint = "not a url".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = create_test_config();
        config.api.endpoint = "ftp://example.com/autocomplete".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_zero_page_cap_rejected() {
        let mut config = create_test_config();
        config.api.page_cap = Some(0);

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_rate_budget_rejected() {
        let mut config = create_test_config();
        config.api.rate_budget = Some(0);

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_max_depth_rejected() {
        let mut config = create_test_config();
        config.crawl.max_depth = 0;

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_names_path_rejected() {
        let mut config = create_test_config();
        config.output.names_path = Some(String::new());

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
