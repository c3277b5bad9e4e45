//! Comparison keys for facility names and best-effort address decomposition.

use regex::Regex;
use std::sync::OnceLock;

use crate::schema::{Region, REGION_PATTERNS};

/// Facility-type words stripped from names, applied in this order
pub const STOPWORDS: &[&str] = &["cc", "gc", "골프장", "컨트리클럽", "country", "club", "golf"];

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[\s\-.()]").expect("separator pattern is valid"))
}

/// Reduce a facility name to its matching key.
///
/// Lowercases, drops whitespace, hyphens, periods and parentheses, then
/// removes every stopword occurrence. Removal repeats until a pass changes
/// nothing, since deleting one stopword can splice two fragments into
/// another (`cgolfc` -> `cc`). Distinct facilities may share a key.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut key = separators().replace_all(&lowered, "").into_owned();

    loop {
        let before = key.len();
        for word in STOPWORDS {
            if key.contains(word) {
                key = key.replace(word, "");
            }
        }
        if key.len() == before {
            return key;
        }
    }
}

/// First region whose pattern occurs anywhere in the address
pub fn extract_region(address: &str) -> Option<Region> {
    if address.is_empty() {
        return None;
    }
    REGION_PATTERNS
        .iter()
        .find(|(pattern, _)| address.contains(pattern))
        .map(|(_, region)| *region)
}

/// Second whitespace-delimited token, usually the 시/군/구
pub fn extract_city(address: &str) -> Option<&str> {
    address.split_whitespace().nth(1)
}
