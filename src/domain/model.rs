use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn from_available(available: bool) -> Self {
        if available {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable
        }
    }

    pub fn is_available(self) -> bool {
        self == AvailabilityStatus::Available
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "available" => Ok(AvailabilityStatus::Available),
            "unavailable" => Ok(AvailabilityStatus::Unavailable),
            other => Err(format!("unknown availability status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub name: String,
    pub status: AvailabilityStatus,
}

/// Ordered, immutable mapping from domain name to availability status.
///
/// Every mutating operation returns a new snapshot; a `Cart` that has been
/// handed out never changes. Cloning only bumps a reference count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Arc<Vec<DomainEntry>>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn status(&self, name: &str) -> Option<AvailabilityStatus> {
        self.position(name).map(|idx| self.entries[idx].status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainEntry> {
        self.entries.iter()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Inserts `name` or overwrites its status in place. The name must
    /// already be normalized.
    pub fn add(&self, name: impl Into<String>, status: AvailabilityStatus) -> Cart {
        let name = name.into();
        let mut entries = self.entries.as_ref().clone();
        match self.position(&name) {
            Some(idx) => entries[idx].status = status,
            None => entries.push(DomainEntry { name, status }),
        }
        Cart::from_entries(entries)
    }

    /// Deleting an absent key yields a snapshot equal to `self`.
    pub fn delete(&self, name: &str) -> Cart {
        if !self.contains(name) {
            return self.clone();
        }
        self.retain(|entry| entry.name != name)
    }

    pub fn clear(&self) -> Cart {
        Cart::new()
    }

    pub fn count_available(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status.is_available())
            .count()
    }

    pub(crate) fn retain<F>(&self, mut keep: F) -> Cart
    where
        F: FnMut(&DomainEntry) -> bool,
    {
        let entries = self
            .entries
            .iter()
            .filter(|entry| keep(entry))
            .cloned()
            .collect();
        Cart::from_entries(entries)
    }

    fn from_entries(entries: Vec<DomainEntry>) -> Cart {
        Cart {
            entries: Arc::new(entries),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

impl FromIterator<(String, AvailabilityStatus)> for Cart {
    fn from_iter<I: IntoIterator<Item = (String, AvailabilityStatus)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Cart::new(), |cart, (name, status)| cart.add(name, status))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum CartStatusKind {
    Exceeded(usize),
    Deficit(usize),
    Ready,
    RemoveUnavailable,
}

impl fmt::Display for CartStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartStatusKind::Exceeded(excess) => write!(
                f,
                "Number of Cart items exceeded. Remove {} domains to proceed to purchase",
                excess
            ),
            CartStatusKind::Deficit(missing) => {
                write!(f, "Add {} more domains to proceed to purchase", missing)
            }
            CartStatusKind::Ready => f.write_str("Cart Ready for purchase"),
            CartStatusKind::RemoveUnavailable => {
                f.write_str("Remove unavailable domains to proceed to purchase")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartStatus {
    pub kind: CartStatusKind,
    pub message: String,
    pub purchase_enabled: bool,
}

impl From<CartStatusKind> for CartStatus {
    fn from(kind: CartStatusKind) -> Self {
        Self {
            kind,
            message: kind.to_string(),
            purchase_enabled: kind == CartStatusKind::Ready,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Info => "info",
        };
        f.write_str(label)
    }
}

/// A transient user-facing event. Rendering and dismissal belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, "", description)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, "", description)
    }

    pub fn warning(description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, "", description)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, "", description)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "[{}] {}", self.level, self.description)
        } else {
            write!(f, "[{}] {}: {}", self.level, self.title, self.description)
        }
    }
}

/// 可用性查詢服務的連線設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleSettings {
    Http {
        endpoint: String,
        timeout: Option<Duration>,
        headers: HashMap<String, String>,
    },
    Static {
        unavailable: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        Cart::new()
            .add("a.com", AvailabilityStatus::Available)
            .add("b.xyz", AvailabilityStatus::Unavailable)
            .add("c.app", AvailabilityStatus::Available)
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let cart = sample_cart();
        let domains: Vec<&str> = cart.domains().collect();
        assert_eq!(domains, vec!["a.com", "b.xyz", "c.app"]);
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let cart = sample_cart().add("b.xyz", AvailabilityStatus::Available);
        let domains: Vec<&str> = cart.domains().collect();
        assert_eq!(domains, vec!["a.com", "b.xyz", "c.app"]);
        assert_eq!(cart.status("b.xyz"), Some(AvailabilityStatus::Available));
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let before = sample_cart();
        let after = before.delete("a.com").add("d.com", AvailabilityStatus::Available);

        assert_eq!(before.len(), 3);
        assert!(before.contains("a.com"));
        assert!(!before.contains("d.com"));
        assert!(!after.contains("a.com"));
        assert!(after.contains("d.com"));
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let cart = sample_cart();
        let same = cart.delete("missing.com");
        assert_eq!(cart, same);
    }

    #[test]
    fn test_clear_and_count_available() {
        let cart = sample_cart();
        assert_eq!(cart.count_available(), 2);

        let cleared = cart.clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.count_available(), 0);
        assert_eq!(cleared, Cart::new());
    }

    #[test]
    fn test_availability_status_parsing() {
        assert_eq!(
            "available".parse::<AvailabilityStatus>(),
            Ok(AvailabilityStatus::Available)
        );
        assert_eq!(
            "unavailable".parse::<AvailabilityStatus>(),
            Ok(AvailabilityStatus::Unavailable)
        );
        assert!("Domain not provided".parse::<AvailabilityStatus>().is_err());
        assert_eq!(AvailabilityStatus::from_available(false).to_string(), "unavailable");
    }

    #[test]
    fn test_notification_display() {
        let plain = Notification::info("Cart cleared");
        assert_eq!(plain.to_string(), "[info] Cart cleared");

        let titled = Notification::success("Customer can successfully purchase").with_title("Success");
        assert_eq!(
            titled.to_string(),
            "[success] Success: Customer can successfully purchase"
        );
    }
}
