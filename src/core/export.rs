use crate::domain::model::Cart;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Empty,
    Copied(String),
}

pub fn export_domains(cart: &Cart) -> String {
    cart.domains().collect::<Vec<_>>().join(", ")
}

pub fn export(cart: &Cart) -> ExportOutcome {
    let list = export_domains(cart);
    if list.is_empty() {
        ExportOutcome::Empty
    } else {
        ExportOutcome::Copied(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AvailabilityStatus::{Available, Unavailable};

    #[test]
    fn test_export_joins_in_insertion_order() {
        let cart = Cart::new().add("a.com", Available).add("b.xyz", Unavailable);
        assert_eq!(export_domains(&cart), "a.com, b.xyz");
        assert_eq!(export(&cart), ExportOutcome::Copied("a.com, b.xyz".to_string()));
    }

    #[test]
    fn test_export_empty_cart() {
        assert_eq!(export_domains(&Cart::new()), "");
        assert_eq!(export(&Cart::new()), ExportOutcome::Empty);
    }
}
