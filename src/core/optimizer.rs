use crate::core::ranker;
use crate::domain::model::Cart;
use std::collections::HashSet;

/// Keeps the `max_domains` best-ranked domains. Survivors keep their
/// position and status; the oracle is not consulted again.
pub fn keep_best(cart: &Cart, max_domains: usize) -> Cart {
    if cart.len() <= max_domains {
        return cart.clone();
    }

    let keep: HashSet<&str> = ranker::rank(cart.domains())
        .into_iter()
        .take(max_domains)
        .collect();

    tracing::debug!(
        kept = keep.len(),
        dropped = cart.len() - keep.len(),
        "pruned cart to best domains"
    );
    cart.retain(|entry| keep.contains(entry.name.as_str()))
}

/// Drops every unavailable entry. Returns a snapshot equal to `cart` when
/// there is nothing to drop.
pub fn remove_unavailable(cart: &Cart) -> Cart {
    if cart.count_available() == cart.len() {
        return cart.clone();
    }
    cart.retain(|entry| entry.status.is_available())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AvailabilityStatus::{Available, Unavailable};

    #[test]
    fn test_keep_best_prefers_suffix_priority() {
        let cart = Cart::new()
            .add("a.com", Available)
            .add("b.xyz", Unavailable)
            .add("c.app", Available);

        let best = keep_best(&cart, 2);
        let domains: Vec<&str> = best.domains().collect();

        assert_eq!(domains, vec!["a.com", "c.app"]);
        assert_eq!(best.status("c.app"), Some(Available));
    }

    #[test]
    fn test_keep_best_preserves_insertion_order_and_status() {
        let cart = Cart::new()
            .add("zeta.com", Unavailable)
            .add("other.net", Available)
            .add("alpha.com", Available);

        let best = keep_best(&cart, 2);
        let domains: Vec<&str> = best.domains().collect();

        assert_eq!(domains, vec!["zeta.com", "alpha.com"]);
        assert_eq!(best.status("zeta.com"), Some(Unavailable));
    }

    #[test]
    fn test_keep_best_with_room_to_spare() {
        let cart = Cart::new().add("a.xyz", Available);
        assert_eq!(keep_best(&cart, 5), cart);
        assert!(keep_best(&cart, 0).is_empty());
    }

    #[test]
    fn test_remove_unavailable() {
        let cart = Cart::new()
            .add("a.com", Available)
            .add("b.xyz", Unavailable)
            .add("c.app", Available);

        let pruned = remove_unavailable(&cart);
        assert_eq!(pruned.len(), 2);
        assert!(!pruned.contains("b.xyz"));
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_remove_unavailable_noop_returns_equal_cart() {
        let cart = Cart::new().add("a.com", Available);
        assert_eq!(remove_unavailable(&cart), cart);
        assert_eq!(remove_unavailable(&Cart::new()), Cart::new());
    }
}
