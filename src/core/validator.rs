//! Admission gate for raw user input.

use crate::domain::model::{Cart, Notification, NotificationLevel};
use regex::Regex;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]+\.(com|app|xyz)$").expect("domain pattern is a valid regex")
});

static VALID_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(com|app|xyz)$").expect("extension pattern is a valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionResult {
    Empty,
    Accepted,
    Duplicate,
    InvalidExtension,
    Malformed,
}

impl AdmissionResult {
    pub fn can_add(self) -> bool {
        self == AdmissionResult::Accepted
    }

    pub fn level(self) -> Option<NotificationLevel> {
        match self {
            AdmissionResult::Empty => None,
            AdmissionResult::Accepted => Some(NotificationLevel::Success),
            AdmissionResult::Duplicate
            | AdmissionResult::InvalidExtension
            | AdmissionResult::Malformed => Some(NotificationLevel::Warning),
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            AdmissionResult::Empty => None,
            AdmissionResult::Accepted => Some("Acceptable domain"),
            AdmissionResult::Duplicate => Some("Already existing in cart"),
            AdmissionResult::InvalidExtension => {
                Some("Improper domain - must end with .com, .app, or .xyz")
            }
            AdmissionResult::Malformed => Some("Improper domain"),
        }
    }

    pub fn notification(self) -> Option<Notification> {
        let level = self.level()?;
        let message = self.message()?;
        Some(Notification::new(level, "", message))
    }
}

pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Classifies `input` against the current cart. Branch order matters: a
/// well-formed name is checked for duplicates before anything else, and only
/// inputs that fail the strict pattern are inspected for their extension.
pub fn validate(input: &str, cart: &Cart) -> AdmissionResult {
    let domain = normalize(input);

    if domain.is_empty() {
        return AdmissionResult::Empty;
    }

    if DOMAIN_PATTERN.is_match(&domain) {
        return if cart.contains(&domain) {
            AdmissionResult::Duplicate
        } else {
            AdmissionResult::Accepted
        };
    }

    if has_extension(&domain) && !VALID_EXTENSION.is_match(&domain) {
        return AdmissionResult::InvalidExtension;
    }

    AdmissionResult::Malformed
}

fn has_extension(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').count() > 1
}
