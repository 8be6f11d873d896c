//! Configuration module for DSA Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so the harvester also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use dsa_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Standard tier: {} USD/GB", config.pricing.standard.price_per_gb);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EstimateConfig, OutputConfig, PricingConfig, SourceConfig, TierConfig,
    UserAgentConfig, DEFAULT_BASE_URL,
};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_hash, override_output_directory,
    parse_config,
};
pub use validation::validate;
