use crate::core::validator::normalize;
use crate::domain::model::AvailabilityStatus;
use crate::domain::ports::AvailabilityOracle;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Offline oracle: every domain is available except the listed ones.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    unavailable: HashSet<String>,
}

impl StaticOracle {
    pub fn new<I, S>(unavailable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            unavailable: unavailable
                .into_iter()
                .map(|domain| normalize(domain.as_ref()))
                .collect(),
        }
    }

    pub fn lookup(&self, domain: &str) -> AvailabilityStatus {
        AvailabilityStatus::from_available(!self.unavailable.contains(&normalize(domain)))
    }
}

#[async_trait]
impl AvailabilityOracle for StaticOracle {
    async fn check(&self, domain: &str) -> Result<AvailabilityStatus> {
        Ok(self.lookup(domain))
    }
}
