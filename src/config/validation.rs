use crate::config::types::{
    Config, EstimateConfig, OutputConfig, PricingConfig, SourceConfig, TierConfig,
    UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_estimate_config(&config.estimates)?;
    validate_pricing_config(&config.pricing)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates catalog source configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use HTTP or HTTPS",
            config.base_url
        )));
    }

    if config.page_param.trim().is_empty() {
        return Err(ConfigError::Validation(
            "page-param cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.name
        )));
    }

    if !config.contact_url.is_empty() {
        Url::parse(&config.contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates the columnar-format reduction factors
fn validate_estimate_config(config: &EstimateConfig) -> Result<(), ConfigError> {
    validate_factor(
        "parquet-conservative-factor",
        config.parquet_conservative_factor,
    )?;
    validate_factor("parquet-aggressive-factor", config.parquet_aggressive_factor)?;
    Ok(())
}

/// A reduction factor is a fraction of the CSV size: (0, 1]
fn validate_factor(name: &str, factor: f64) -> Result<(), ConfigError> {
    if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
        return Err(ConfigError::Validation(format!(
            "{} must be in (0, 1], got {}",
            name, factor
        )));
    }
    Ok(())
}

/// Validates both storage tiers
fn validate_pricing_config(config: &PricingConfig) -> Result<(), ConfigError> {
    validate_tier(&config.standard)?;
    validate_tier(&config.deep_archive)?;
    Ok(())
}

fn validate_tier(tier: &TierConfig) -> Result<(), ConfigError> {
    if tier.label.trim().is_empty() {
        return Err(ConfigError::Validation(
            "pricing tier label cannot be empty".to_string(),
        ));
    }

    if !tier.price_per_gb.is_finite() || tier.price_per_gb < 0.0 {
        return Err(ConfigError::Validation(format!(
            "price-per-gb for '{}' must be a non-negative number, got {}",
            tier.label, tier.price_per_gb
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    validate_file_prefix(&config.file_prefix)
}

fn validate_file_prefix(prefix: &str) -> Result<(), ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file-prefix cannot be empty".to_string(),
        ));
    }

    if prefix.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "file-prefix must be a plain file name, got '{}'",
            prefix
        )));
    }

    Ok(())
}
