//! Lenient parsing of the model's two-line answer.

use regex::Regex;
use std::sync::OnceLock;

/// Title and description as parsed from a model answer. Either may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub title: String,
    pub description: String,
}

fn bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(.*?)\]").expect("valid regex"))
}

/// Removes stray `[` at the start and `]` at the end until neither end has one.
fn strip_brackets(mut title: &str) -> &str {
    while let Some(rest) = title
        .strip_prefix('[')
        .or_else(|| title.strip_suffix(']'))
    {
        title = rest;
    }
    title
}

/// Parses `raw` (trimmed first): line one holds the title, preferably in `[brackets]`; everything
/// after the first newline is the description.
///
/// Malformed answers never fail: without brackets the whole first line is the title, and a
/// single-line answer has an empty description.
pub fn parse_model_answer(raw: &str) -> ParsedAnswer {
    let trimmed = raw.trim();
    let (first, description) = match trimmed.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };
    let candidate = bracketed()
        .captures(first)
        .and_then(|c| c.get(1))
        .map_or(first, |m| m.as_str());
    ParsedAnswer {
        title: strip_brackets(candidate).to_string(),
        description: description.to_string(),
    }
}
