pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{build_oracle, HttpOracle, StaticOracle};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::CartEngine;
pub use crate::core::session::{CartEvent, CartSession};
pub use crate::core::validator::AdmissionResult;
pub use crate::domain::model::{AvailabilityStatus, Cart, CartStatus, Notification, NotificationLevel};
pub use crate::domain::ports::{AvailabilityOracle, ConfigProvider};
pub use crate::utils::error::{CartError, Result};
