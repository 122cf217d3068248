pub mod engine;
pub mod export;
pub mod optimizer;
pub mod ranker;
pub mod session;
pub mod status;
pub mod validator;

pub use crate::domain::model::{
    AvailabilityStatus, Cart, CartStatus, CartStatusKind, DomainEntry, Notification,
    NotificationLevel, OracleSettings,
};
pub use crate::domain::ports::{AvailabilityOracle, ConfigProvider};
pub use crate::utils::error::Result;
