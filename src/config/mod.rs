#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_ORACLE_ENDPOINT: &str = "http://localhost:3000/api/hello";
pub const DEFAULT_MAX_DOMAINS: usize = 12;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
