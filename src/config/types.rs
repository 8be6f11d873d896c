use serde::Deserialize;

/// Default catalog listing the daily archives
pub const DEFAULT_BASE_URL: &str = "https://transparency.dsa.ec.europa.eu/explore-data/download";

/// Main configuration structure for DSA Harvest
///
/// Every section falls back to its defaults, so an empty file (or no file at
/// all) yields a configuration that harvests the public portal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub estimates: EstimateConfig,
    pub pricing: PricingConfig,
    pub output: OutputConfig,
}

/// Catalog source and transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Catalog page URL, without the page query parameter
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Name of the query parameter carrying the 1-based page number
    #[serde(rename = "page-param")]
    pub page_param: String,

    /// Pause between two consecutive page requests (milliseconds)
    #[serde(rename = "inter-page-delay-ms")]
    pub inter_page_delay_ms: u64,

    /// Whole-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Extra attempts for transient failures; 0 means a single attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Pause before each retry (milliseconds)
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_param: "page".to_string(),
            inter_page_delay_ms: 500,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 0,
            retry_delay_ms: 5000,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the harvester
    pub name: String,

    /// Version of the harvester
    pub version: String,

    /// URL with information about the harvester
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "dsa-harvest".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: String::new(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        if self.contact_url.is_empty() {
            format!("{}/{}", self.name, self.version)
        } else {
            format!("{}/{} (+{})", self.name, self.version, self.contact_url)
        }
    }
}

/// Columnar-format size assumptions applied to the full CSV total
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Parquet size as a fraction of CSV size, pessimistic about compression
    #[serde(rename = "parquet-conservative-factor")]
    pub parquet_conservative_factor: f64,

    /// Parquet size as a fraction of CSV size, optimistic about compression
    #[serde(rename = "parquet-aggressive-factor")]
    pub parquet_aggressive_factor: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            parquet_conservative_factor: 0.2,
            parquet_aggressive_factor: 0.1,
        }
    }
}

/// Per-gigabyte prices of the two storage tiers costed in every summary
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub standard: TierConfig,
    #[serde(rename = "deep-archive")]
    pub deep_archive: TierConfig,
}

impl Default for PricingConfig {
    fn default() -> Self {
        // eu-central, same region as the portal's own bucket
        Self {
            standard: TierConfig {
                label: "eu-central S3 Standard".to_string(),
                price_per_gb: 0.0245,
            },
            deep_archive: TierConfig {
                label: "eu-central S3 Glacier Deep Archive".to_string(),
                price_per_gb: 0.0018,
            },
        }
    }
}

/// A single storage tier
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// Human-readable tier name, used in logs and the console report
    pub label: String,

    /// Monthly price in USD per (decimal) gigabyte
    #[serde(rename = "price-per-gb")]
    pub price_per_gb: f64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the JSON export
    pub directory: String,

    /// File name prefix; a timestamp and `.json` are appended
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "data/output".to_string(),
            file_prefix: "dsa_data_export".to_string(),
        }
    }
}
