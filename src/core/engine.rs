use crate::core::session::{CartEvent, CartSession};
use crate::core::validator::{self, AdmissionResult};
use crate::domain::model::Notification;
use crate::domain::ports::AvailabilityOracle;

/// Drives a `CartSession`, running the oracle round-trip for new domains.
///
/// `add` takes `&mut self`, so at most one availability check is in flight
/// for a given engine.
pub struct CartEngine<O: AvailabilityOracle> {
    oracle: O,
    session: CartSession,
}

impl<O: AvailabilityOracle> CartEngine<O> {
    pub fn new(oracle: O, max_domains: usize) -> Self {
        Self::with_session(oracle, CartSession::new(max_domains))
    }

    pub fn with_session(oracle: O, session: CartSession) -> Self {
        Self { oracle, session }
    }

    pub fn session(&self) -> &CartSession {
        &self.session
    }

    pub fn check(&self, input: &str) -> AdmissionResult {
        self.session.check_input(input)
    }

    pub async fn add(&mut self, input: &str) -> Vec<Notification> {
        let admission = self.check(input);
        if !admission.can_add() {
            tracing::debug!(input, ?admission, "input rejected");
            return admission.notification().into_iter().collect();
        }

        let domain = validator::normalize(input);
        tracing::info!("Checking availability of {}", domain);

        let event = match self.oracle.check(&domain).await {
            Ok(status) => {
                tracing::info!("{} is {}", domain, status);
                CartEvent::AvailabilityResolved { domain, status }
            }
            Err(e) => {
                tracing::warn!("Availability check for {} failed: {}", domain, e);
                CartEvent::AvailabilityFailed {
                    domain,
                    reason: e.user_friendly_message(),
                }
            }
        };

        self.dispatch(event)
    }

    pub fn dispatch(&mut self, event: CartEvent) -> Vec<Notification> {
        let (next, notifications) = self.session.apply(event);
        if next.cart() != self.session.cart() {
            tracing::debug!(
                size = next.cart().len(),
                status = %next.status().message,
                "cart changed"
            );
        }
        self.session = next;
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::StaticOracle;
    use crate::domain::model::AvailabilityStatus;
    use crate::domain::model::NotificationLevel;
    use crate::utils::error::{CartError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingOracle;

    #[async_trait]
    impl AvailabilityOracle for FailingOracle {
        async fn check(&self, _domain: &str) -> Result<AvailabilityStatus> {
            Err(CartError::OracleStatus {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct CountingOracle {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AvailabilityOracle for CountingOracle {
        async fn check(&self, _domain: &str) -> Result<AvailabilityStatus> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AvailabilityStatus::Available)
        }
    }

    #[tokio::test]
    async fn test_add_normalizes_and_resolves() {
        let oracle = StaticOracle::new(["taken.com"]);
        let mut engine = CartEngine::new(oracle, 2);

        let notes = engine.add("  Example.COM ").await;
        assert!(notes.is_empty());
        assert_eq!(
            engine.session().cart().status("example.com"),
            Some(AvailabilityStatus::Available)
        );

        engine.add("TAKEN.com").await;
        assert_eq!(
            engine.session().cart().status("taken.com"),
            Some(AvailabilityStatus::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_rejected_input_skips_oracle() {
        let oracle = CountingOracle::default();
        let calls = oracle.calls.clone();
        let mut engine = CartEngine::new(oracle, 2);

        assert!(engine.add("").await.is_empty());
        let notes = engine.add("foo.net").await;
        assert_eq!(notes[0].level, NotificationLevel::Warning);

        engine.add("a.com").await;
        let notes = engine.add("A.com").await;
        assert_eq!(notes[0].description, "Already existing in cart");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_oracle_failure_is_not_fatal() {
        let mut engine = CartEngine::new(FailingOracle, 2);

        let notes = engine.add("a.com").await;

        assert!(engine.session().cart().is_empty());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Error);
        assert_eq!(engine.check("a.com"), AdmissionResult::Accepted);
    }
}
