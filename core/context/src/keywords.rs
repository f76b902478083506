//! Keyword extraction and expansion feeding the slicer's `plan` step.
//!
//! The optional LLM-backed expansion the contract in §6 mentions needs an
//! embedding/model call this workspace's Non-goals exclude; only the
//! static synonym map runs here.

use std::collections::HashSet;

const MIN_KEYWORD_LEN: usize = 3;
const MAX_EXPANDED_KEYWORDS: usize = 20;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use", "with",
    "that", "this", "from", "have", "what", "when", "where", "which", "will", "would", "there",
    "their", "about", "into", "than", "then", "them", "these", "those", "some", "such",
];

/// A small static synonym map covering the most common cross-stack
/// vocabulary a task description uses.
fn synonyms(keyword: &str) -> &'static [&'static str] {
    match keyword {
        "auth" | "authentication" => &["login", "session", "token", "credential"],
        "login" => &["auth", "signin", "session"],
        "delete" => &["remove", "destroy"],
        "remove" => &["delete"],
        "fetch" => &["get", "request", "load"],
        "config" => &["configuration", "settings"],
        "error" => &["exception", "failure"],
        "test" => &["spec", "tests"],
        "bug" => &["issue", "defect"],
        _ => &[],
    }
}

/// Lowercase tokens of length >= 3, stopword-filtered, from `task`.
pub fn extract_raw_keywords(task: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in task.split(|c: char| !c.is_alphanumeric()) {
        let lower = raw.to_lowercase();
        if lower.len() < MIN_KEYWORD_LEN {
            continue;
        }
        if STOPWORDS.contains(&lower.as_str()) {
            continue;
        }
        if seen.insert(lower.clone()) {
            out.push(lower);
        }
    }
    out
}

/// Expand `raw` with the static synonym map, deduplicated and capped at
/// [`MAX_EXPANDED_KEYWORDS`]. Original keywords are always kept ahead of
/// any synonym they contributed.
pub fn expand_keywords(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for keyword in raw {
        if seen.insert(keyword.clone()) {
            out.push(keyword.clone());
        }
    }
    for keyword in raw {
        for synonym in synonyms(keyword) {
            if out.len() >= MAX_EXPANDED_KEYWORDS {
                return out;
            }
            if seen.insert(synonym.to_string()) {
                out.push(synonym.to_string());
            }
        }
    }
    out.truncate(MAX_EXPANDED_KEYWORDS);
    out
}

#[cfg(test)]
#[path = "keywords.test.rs"]
mod tests;
