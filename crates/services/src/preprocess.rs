//! Source-text cleanup applied before anything is sent to the generator.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words forwarded to the generator at most.
pub const MAX_SOURCE_WORDS: usize = 2000;

static SECTION_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:chapter\s+\d+|section\s+\d+|introduction|summary)\b").ok()
});

/// Clean pasted study text and cap it at [`MAX_SOURCE_WORDS`].
///
/// Repeated lines (running headers, page footers) are kept once, whitespace
/// collapses to single spaces, and introduction, chapter and summary sections
/// move to the front so the word cap cuts less important text first.
#[must_use]
pub fn preprocess_source(raw: &str) -> String {
    let deduped = dedupe_lines(raw);
    let collapsed = collapse_whitespace(&deduped);
    let prioritized = prioritize_sections(&collapsed);
    truncate_words(&prioritized, MAX_SOURCE_WORDS)
}

fn dedupe_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn prioritize_sections(text: &str) -> String {
    let Some(heading) = SECTION_HEADING.as_ref() else {
        return text.to_string();
    };

    let starts: Vec<usize> = heading.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return text.to_string();
    }

    let mut first = Vec::new();
    let mut rest = Vec::new();
    if starts[0] > 0 {
        rest.push(text[..starts[0]].trim());
    }
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let section = text[start..end].trim();
        if section.to_lowercase().starts_with("section") {
            rest.push(section);
        } else {
            first.push(section);
        }
    }

    if first.is_empty() {
        return text.to_string();
    }
    first
        .into_iter()
        .chain(rest)
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
