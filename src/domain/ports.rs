use crate::domain::model::{AvailabilityStatus, OracleSettings};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External service that decides whether a domain can still be registered.
///
/// Implementations must not retry on their own; a failure is reported back to
/// the caller, which leaves the cart untouched.
#[async_trait]
pub trait AvailabilityOracle: Send + Sync {
    async fn check(&self, domain: &str) -> Result<AvailabilityStatus>;
}

#[async_trait]
impl<T: AvailabilityOracle + ?Sized> AvailabilityOracle for Box<T> {
    async fn check(&self, domain: &str) -> Result<AvailabilityStatus> {
        (**self).check(domain).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn max_domains(&self) -> usize;
    fn oracle(&self) -> OracleSettings;
    fn json_logs(&self) -> bool;
}
