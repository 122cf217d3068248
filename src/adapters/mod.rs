// Adapters layer: concrete availability oracles.

pub mod http;
pub mod memory;

use crate::domain::model::OracleSettings;
use crate::domain::ports::AvailabilityOracle;
use crate::utils::error::Result;

pub use http::HttpOracle;
pub use memory::StaticOracle;

pub fn build_oracle(settings: &OracleSettings) -> Result<Box<dyn AvailabilityOracle>> {
    match settings {
        OracleSettings::Http {
            endpoint,
            timeout,
            headers,
        } => {
            tracing::debug!("Using HTTP availability oracle at {}", endpoint);
            Ok(Box::new(HttpOracle::with_options(
                endpoint.clone(),
                *timeout,
                headers,
            )?))
        }
        OracleSettings::Static { unavailable } => {
            tracing::debug!(
                "Using offline availability oracle ({} unavailable domains)",
                unavailable.len()
            );
            Ok(Box::new(StaticOracle::new(unavailable)))
        }
    }
}
