//! Explicit cart state plus the reducer that moves it forward.
//!
//! `CartSession` owns the cart snapshot, the capacity and the status derived
//! from both. `apply` never mutates `self`: it returns the next session along
//! with the notifications the transition produced, and the status of the
//! returned session is always recomputed from its own cart.

use crate::core::export::{self, ExportOutcome};
use crate::core::validator::{self, AdmissionResult};
use crate::core::{optimizer, status};
use crate::domain::model::{AvailabilityStatus, Cart, CartStatus, Notification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    AvailabilityResolved {
        domain: String,
        status: AvailabilityStatus,
    },
    AvailabilityFailed {
        domain: String,
        reason: String,
    },
    Delete(String),
    Clear,
    RemoveUnavailable,
    KeepBest,
    Copy,
    Purchase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSession {
    cart: Cart,
    max_domains: usize,
    status: CartStatus,
}

impl CartSession {
    pub fn new(max_domains: usize) -> Self {
        Self::with_cart(Cart::new(), max_domains)
    }

    pub fn with_cart(cart: Cart, max_domains: usize) -> Self {
        let status = status::evaluate(&cart, max_domains);
        Self {
            cart,
            max_domains,
            status,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn max_domains(&self) -> usize {
        self.max_domains
    }

    pub fn status(&self) -> &CartStatus {
        &self.status
    }

    pub fn purchase_enabled(&self) -> bool {
        self.status.purchase_enabled
    }

    pub fn summary(&self) -> String {
        status::summary(&self.cart, self.max_domains)
    }

    pub fn check_input(&self, input: &str) -> AdmissionResult {
        validator::validate(input, &self.cart)
    }

    pub fn apply(&self, event: CartEvent) -> (CartSession, Vec<Notification>) {
        match event {
            CartEvent::AvailabilityResolved { domain, status } => {
                tracing::debug!(%domain, %status, "adding domain to cart");
                (self.replace(self.cart.add(domain, status)), Vec::new())
            }
            CartEvent::AvailabilityFailed { domain, reason } => {
                tracing::debug!(%domain, %reason, "availability check failed, cart unchanged");
                let notification =
                    Notification::error(format!("Error checking domain availability: {}", reason))
                        .with_title("Error");
                (self.clone(), vec![notification])
            }
            CartEvent::Delete(domain) => (self.replace(self.cart.delete(&domain)), Vec::new()),
            CartEvent::Clear => {
                let notification = if self.cart.is_empty() {
                    Notification::info("Cart is empty")
                } else {
                    Notification::info("Cart cleared")
                };
                (self.replace(self.cart.clear()), vec![notification])
            }
            CartEvent::RemoveUnavailable => {
                let pruned = optimizer::remove_unavailable(&self.cart);
                if pruned == self.cart {
                    let notification = Notification::warning("No unavailable domains in cart");
                    (self.clone(), vec![notification])
                } else {
                    (self.replace(pruned), Vec::new())
                }
            }
            CartEvent::KeepBest => {
                let best = optimizer::keep_best(&self.cart, self.max_domains);
                (self.replace(best), vec![Notification::info("Cart Optimized")])
            }
            CartEvent::Copy => {
                let notification = match export::export(&self.cart) {
                    ExportOutcome::Copied(_) => Notification::success("Data copied to clipboard"),
                    ExportOutcome::Empty => Notification::info("Cart is empty"),
                };
                (self.clone(), vec![notification])
            }
            CartEvent::Purchase => {
                let notification = if self.status.purchase_enabled {
                    Notification::success("Customer can successfully purchase").with_title("Success")
                } else {
                    Notification::warning(self.status.message.clone())
                };
                (self.clone(), vec![notification])
            }
        }
    }

    fn replace(&self, cart: Cart) -> CartSession {
        CartSession::with_cart(cart, self.max_domains)
    }
}
