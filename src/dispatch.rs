// src/dispatch.rs
//! URL alias rewriting and platform routing.
//!
//! Both steps are plain substring operations on the raw input. They do not parse the
//! URL authority, so `x.com` inside a path or query is rewritten as well.

use crate::types::Platform;

/// (alias, canonical) pairs. Only the first occurrence of each alias is replaced.
const ALIASES: [(&str, &str); 2] = [("x.com", "twitter.com"), ("threads.com", "threads.net")];

/// Ordered routing table; the first matching needle wins.
const ROUTES: [(&str, Platform); 3] = [
    ("twitter.com", Platform::Twitter),
    ("instagram.com", Platform::Instagram),
    ("threads.net", Platform::Threads),
];

/// Rewrite known domain aliases to the hosts the extraction backend expects.
pub fn normalize_url(raw: &str) -> String {
    let mut out = raw.to_string();
    for (alias, canonical) in ALIASES {
        if out.contains(alias) {
            out = out.replacen(alias, canonical, 1);
        }
    }
    out
}

/// Pick the platform for an already-normalized URL.
pub fn route(url: &str) -> Option<Platform> {
    ROUTES
        .iter()
        .find(|(needle, _)| url.contains(needle))
        .map(|(_, platform)| *platform)
}

/// Normalize then route. Returns the rewritten URL alongside its platform.
pub fn resolve(raw: &str) -> Option<(String, Platform)> {
    let url = normalize_url(raw);
    route(&url).map(|p| (url, p))
}
