use crate::config::{DEFAULT_MAX_DOMAINS, MAX_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, OracleSettings};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const ORACLE_TYPES: [&str; 2] = ["http", "static"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub cart: CartConfig,
    pub oracle: OracleConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default = "default_max_domains")]
    pub max_domains: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_domains: DEFAULT_MAX_DOMAINS,
        }
    }
}

fn default_max_domains() -> usize {
    DEFAULT_MAX_DOMAINS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub r#type: String,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
    pub unavailable: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORACLE_TOKEN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("cart.max_domains", self.cart.max_domains, 1)?;
        validation::validate_one_of("oracle.type", &self.oracle.r#type, &ORACLE_TYPES)?;

        if self.oracle.r#type == "http" {
            let endpoint =
                validation::validate_required_field("oracle.endpoint", &self.oracle.endpoint)?;
            validation::validate_url("oracle.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.oracle.timeout_seconds {
            validation::validate_range("oracle.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        for domain in self.oracle.unavailable.iter().flatten() {
            validation::validate_non_empty_string("oracle.unavailable", domain)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn max_domains(&self) -> usize {
        self.cart.max_domains
    }

    fn oracle(&self) -> OracleSettings {
        match self.oracle.r#type.as_str() {
            "static" => OracleSettings::Static {
                unavailable: self.oracle.unavailable.clone().unwrap_or_default(),
            },
            _ => OracleSettings::Http {
                endpoint: self.oracle.endpoint.clone().unwrap_or_default(),
                timeout: self.oracle.timeout_seconds.map(Duration::from_secs),
                headers: self.oracle.headers.clone().unwrap_or_default(),
            },
        }
    }

    fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
