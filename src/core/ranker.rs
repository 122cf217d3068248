use std::cmp::Ordering;

/// Priority assigned to suffixes outside `.com`, `.app` and `.xyz`, so they
/// always rank after the known ones.
pub const UNKNOWN_SUFFIX_PRIORITY: u8 = u8::MAX;

pub fn suffix_priority(domain: &str) -> u8 {
    match domain.rsplit_once('.').map(|(_, suffix)| suffix) {
        Some("com") => 1,
        Some("app") => 2,
        Some("xyz") => 3,
        _ => UNKNOWN_SUFFIX_PRIORITY,
    }
}

/// Orders domains by suffix priority, then by the full name. Strict total
/// order: names are compared byte-wise, so ties only happen for equal names.
pub fn compare(a: &str, b: &str) -> Ordering {
    suffix_priority(a)
        .cmp(&suffix_priority(b))
        .then_with(|| a.cmp(b))
}

/// Sorts `domains` best first.
pub fn rank<'a, I>(domains: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked: Vec<&str> = domains.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}
