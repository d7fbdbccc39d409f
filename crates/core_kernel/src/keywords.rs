//! Keyword matching shared by the rule tables
//!
//! Matching is plain substring containment. Callers lower-case the haystack
//! once; keywords in the tables are already lower case. There is no word
//! boundary handling, so `"old"` matches inside `"bold"`.

/// Returns true if any keyword occurs in `haystack`
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Returns the first keyword (in table order) that occurs in `haystack`
pub fn first_match<'a>(haystack: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|k| haystack.contains(k))
}
