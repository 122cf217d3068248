use crate::domain::model::{Cart, CartStatus, CartStatusKind};
use std::cmp::Ordering;

/// Derives the cart status from its size and contents. Total over every
/// `(cart, max_domains)` pair; the first matching rule wins.
pub fn evaluate(cart: &Cart, max_domains: usize) -> CartStatus {
    let size = cart.len();

    let kind = match size.cmp(&max_domains) {
        Ordering::Greater => CartStatusKind::Exceeded(size - max_domains),
        Ordering::Less => CartStatusKind::Deficit(max_domains - size),
        Ordering::Equal if cart.count_available() == max_domains => CartStatusKind::Ready,
        Ordering::Equal => CartStatusKind::RemoveUnavailable,
    };

    tracing::trace!(size, max_domains, ?kind, "cart status evaluated");
    CartStatus::from(kind)
}

pub fn summary(cart: &Cart, max_domains: usize) -> String {
    format!("Cart: {} of {} domains", cart.len(), max_domains)
}
