//! Candidate-construction helpers shared by every strategy in this
//! crate, so the representation/token bookkeeping in §3's
//! `SliceCandidate` is written once.

use ivo_protocol::estimate_tokens;
use ivo_protocol::Representation;
use ivo_protocol::SliceAlternate;
use ivo_protocol::SliceCandidate;
use std::fs;
use std::path::Path;

pub fn candidate_id(strategy: &str, path: &str) -> String {
    format!("{strategy}:{path}")
}

/// Read `relative`'s content under `root`, returning `None` on any I/O
/// failure (missing file, permission error, non-UTF8 bytes) rather than
/// failing the whole strategy.
pub fn read_file(root: &Path, relative: &str) -> Option<String> {
    fs::read_to_string(root.join(relative)).ok()
}

fn base_candidate(strategy: &str, path: &str, representation: Representation, score: f64, reason: impl Into<String>, source: impl Into<String>) -> SliceCandidate {
    SliceCandidate {
        id: candidate_id(strategy, path),
        path: path.to_string(),
        strategy: strategy.to_string(),
        representation,
        score: SliceCandidate::clamp_score(score),
        tokens: 0,
        reason: reason.into(),
        source: source.into(),
        content: None,
        codemap: None,
        alternates: Vec::new(),
    }
}

pub fn full_candidate(strategy: &str, path: &str, score: f64, reason: impl Into<String>, source: impl Into<String>, content: String) -> SliceCandidate {
    let mut candidate = base_candidate(strategy, path, Representation::Full, score, reason, source);
    candidate.tokens = estimate_tokens(&content);
    candidate.content = Some(content);
    candidate
}

pub fn snippet_candidate(strategy: &str, path: &str, score: f64, reason: impl Into<String>, source: impl Into<String>, snippet: String) -> SliceCandidate {
    let mut candidate = base_candidate(strategy, path, Representation::Snippet, score, reason, source);
    candidate.tokens = estimate_tokens(&snippet);
    candidate.content = Some(snippet);
    candidate
}

pub fn codemap_candidate(strategy: &str, path: &str, score: f64, reason: impl Into<String>, source: impl Into<String>, rendered: String) -> SliceCandidate {
    let mut candidate = base_candidate(strategy, path, Representation::Codemap, score, reason, source);
    candidate.tokens = estimate_tokens(&rendered);
    candidate.codemap = Some(rendered);
    candidate
}

/// The cheapest representation a candidate can fall back to: just the
/// path and why it matched, no body.
pub fn reference_candidate(strategy: &str, path: &str, score: f64, reason: impl Into<String>, source: impl Into<String>) -> SliceCandidate {
    let reference_text = format!("{path} (see {strategy})");
    let mut candidate = base_candidate(strategy, path, Representation::Reference, score, reason, source);
    candidate.tokens = estimate_tokens(&reference_text);
    candidate.content = Some(reference_text);
    candidate
}

pub fn reference_alternate(path: &str, strategy: &str) -> SliceAlternate {
    let content = format!("{path} (see {strategy})");
    SliceAlternate { representation: Representation::Reference, tokens: estimate_tokens(&content), content }
}

/// Truncate `content` to at most `max_lines` lines, suffixing a marker
/// when something was cut (used by `config`'s oversized-file rule).
pub fn truncate_lines(content: &str, max_lines: usize) -> String {
    let mut lines = content.lines();
    let head: Vec<&str> = lines.by_ref().take(max_lines).collect();
    if lines.next().is_some() {
        format!("{}\n... (truncated)", head.join("\n"))
    } else {
        head.join("\n")
    }
}

/// A snippet built from the lines around `line_number` (1-based),
/// expanded by `context_lines` on either side.
pub fn line_snippet(content: &str, line_number: usize, context_lines: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let center = line_number.saturating_sub(1).min(lines.len().saturating_sub(1));
    let start = center.saturating_sub(context_lines);
    let end = (center + context_lines + 1).min(lines.len());
    lines[start..end].join("\n")
}

/// Merge a set of 1-based line numbers that fall within `context_lines`
/// of each other into non-overlapping, sorted `(start, end)` ranges
/// (inclusive, 1-based), the way the `keyword` strategy's contract asks
/// for (§4.6).
pub fn merge_line_ranges(mut lines: Vec<usize>, context_lines: usize, total_lines: usize) -> Vec<(usize, usize)> {
    lines.sort_unstable();
    lines.dedup();
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for line in lines {
        let start = line.saturating_sub(context_lines).max(1);
        let end = (line + context_lines).min(total_lines.max(1));
        match ranges.last_mut() {
            Some((_, last_end)) if start <= *last_end + 1 => *last_end = end.max(*last_end),
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

#[cfg(test)]
#[path = "support.test.rs"]
mod tests;
