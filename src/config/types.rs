use crate::alphabet::Alphabet;
use serde::Deserialize;

/// Main configuration structure for Namesweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the autocomplete endpoint
    pub endpoint: String,

    /// API generation, which fixes the default page cap, rate budget and
    /// alphabet
    pub version: ApiVersion,

    /// Override for the endpoint's maximum page size
    #[serde(rename = "page-cap")]
    pub page_cap: Option<usize>,

    /// Override for the calls-per-minute budget
    #[serde(rename = "rate-budget")]
    pub rate_budget: Option<u32>,
}

/// Sweep behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Maximum prefix length to expand to
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: usize,

    /// How many times a throttled query is replayed before the run fails
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Cooldown after a throttling rejection, in seconds
    #[serde(rename = "throttle-cooldown-secs", default = "default_cooldown_secs")]
    pub throttle_cooldown_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the sorted name listing; no export when unset
    #[serde(rename = "names-path")]
    pub names_path: Option<String>,
}

/// The observed generations of the autocomplete API
///
/// Each generation differs only in its page cap, its rate budget and the
/// symbol set its names are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ApiVersion {
    #[serde(rename = "v1")]
    V1,
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v3")]
    V3,
}

impl ApiVersion {
    /// Default maximum page size for this generation
    pub fn page_cap(&self) -> usize {
        match self {
            ApiVersion::V1 => 50,
            ApiVersion::V2 => 75,
            ApiVersion::V3 => 100,
        }
    }

    /// Default calls-per-minute budget for this generation
    pub fn rate_budget(&self) -> u32 {
        match self {
            ApiVersion::V1 => 100,
            ApiVersion::V2 => 50,
            ApiVersion::V3 => 80,
        }
    }

    /// Symbol alphabet this generation's names are drawn from
    pub fn alphabet(&self) -> Alphabet {
        match self {
            ApiVersion::V1 => Alphabet::Letters,
            ApiVersion::V2 => Alphabet::AlphanumericWrap,
            ApiVersion::V3 => Alphabet::AlphanumericPunctuationWrap,
        }
    }
}

impl ApiConfig {
    /// Page cap in effect: the override if present, else the version default
    pub fn effective_page_cap(&self) -> usize {
        self.page_cap.unwrap_or_else(|| self.version.page_cap())
    }

    /// Rate budget in effect: the override if present, else the version default
    pub fn effective_rate_budget(&self) -> u32 {
        self.rate_budget.unwrap_or_else(|| self.version.rate_budget())
    }
}

fn default_max_depth() -> usize {
    6
}

fn default_max_retries() -> u32 {
    5
}

fn default_cooldown_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_defaults() {
        assert_eq!(ApiVersion::V1.page_cap(), 50);
        assert_eq!(ApiVersion::V2.page_cap(), 75);
        assert_eq!(ApiVersion::V3.page_cap(), 100);

        assert_eq!(ApiVersion::V1.rate_budget(), 100);
        assert_eq!(ApiVersion::V2.rate_budget(), 50);
        assert_eq!(ApiVersion::V3.rate_budget(), 80);

        assert_eq!(ApiVersion::V1.alphabet(), Alphabet::Letters);
        assert_eq!(ApiVersion::V2.alphabet(), Alphabet::AlphanumericWrap);
        assert_eq!(
            ApiVersion::V3.alphabet(),
            Alphabet::AlphanumericPunctuationWrap
        );
    }

    #[test]
    fn test_effective_values_prefer_overrides() {
        let api = ApiConfig {
            endpoint: "http://example.com/v1/autocomplete".to_string(),
            version: ApiVersion::V1,
            page_cap: Some(10),
            rate_budget: Some(600),
        };

        assert_eq!(api.effective_page_cap(), 10);
        assert_eq!(api.effective_rate_budget(), 600);
    }

    #[test]
    fn test_effective_values_fall_back_to_version() {
        let api = ApiConfig {
            endpoint: "http://example.com/v2/autocomplete".to_string(),
            version: ApiVersion::V2,
            page_cap: None,
            rate_budget: None,
        };

        assert_eq!(api.effective_page_cap(), 75);
        assert_eq!(api.effective_rate_budget(), 50);
    }
}
