use crate::config::{DEFAULT_MAX_DOMAINS, DEFAULT_ORACLE_ENDPOINT, MAX_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, OracleSettings};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "domain-cart")]
#[command(about = "Build a cart of domain names and check their availability")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ORACLE_ENDPOINT)]
    pub oracle_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_MAX_DOMAINS)]
    pub max_domains: usize,

    #[arg(long, help = "Per-request timeout for the availability oracle")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Use the built-in offline oracle instead of HTTP")]
    pub offline: bool,

    #[arg(long, value_delimiter = ',', help = "Domains the offline oracle reports as taken")]
    pub unavailable: Vec<String>,

    #[arg(short, long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn max_domains(&self) -> usize {
        self.max_domains
    }

    fn oracle(&self) -> OracleSettings {
        if self.offline {
            OracleSettings::Static {
                unavailable: self.unavailable.clone(),
            }
        } else {
            OracleSettings::Http {
                endpoint: self.oracle_endpoint.clone(),
                timeout: self.timeout_seconds.map(Duration::from_secs),
                headers: HashMap::new(),
            }
        }
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("max_domains", self.max_domains, 1)?;

        if !self.offline {
            validation::validate_url("oracle_endpoint", &self.oracle_endpoint)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        for domain in &self.unavailable {
            validation::validate_non_empty_string("unavailable", domain)?;
        }

        Ok(())
    }
}
