//! Classification rules for compiler output lines.
//!
//! Each line is matched against a fixed rule list, in order. A rule wraps
//! only the text it matched; the rest of the line passes through. Because
//! later rules run over the already-rewritten line, overlapping matches nest
//! rather than conflict — the rule order below is part of the contract.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Semantic class of a matched piece of compiler output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    /// Source location plumbing: `-->` arrows, `= note` markers, gutters.
    Location,
    /// Compilation progress, e.g. leading `Compiling`.
    Progress,
    /// A `warning` prefix.
    Warning,
    /// An `error` prefix.
    Error,
    /// A `help` prefix.
    Help,
}

impl LineClass {
    /// CSS class used by the HTML renderer.
    pub fn css_class(self) -> &'static str {
        match self {
            LineClass::Location => "cw-info",
            LineClass::Progress => "cw-success",
            LineClass::Warning => "cw-warn",
            LineClass::Error => "cw-error",
            LineClass::Help => "cw-help",
        }
    }
}

/// One classification rule: a matcher and the class it assigns.
struct Rule {
    class: LineClass,
    matcher: fn(&str) -> Option<Range<usize>>,
}

/// The fixed rule list, applied in order.
const RULES: &[Rule] = &[
    Rule {
        class: LineClass::Location,
        matcher: match_location,
    },
    Rule {
        class: LineClass::Progress,
        matcher: match_progress,
    },
    Rule {
        class: LineClass::Warning,
        matcher: |line| match_prefix(line, "warning"),
    },
    Rule {
        class: LineClass::Error,
        matcher: |line| match_prefix(line, "error"),
    },
    Rule {
        class: LineClass::Help,
        matcher: |line| match_prefix(line, "help"),
    },
];

/// Applies every rule, in order, to a single line.
///
/// `wrap` receives the matched text and its class and returns the wrapped
/// replacement; each rule rewrites at most its first match.
pub fn rewrite_line<F>(line: &str, mut wrap: F) -> String
where
    F: FnMut(&str, LineClass) -> String,
{
    let mut out = line.to_string();
    for rule in RULES {
        if let Some(range) = (rule.matcher)(&out) {
            let wrapped = wrap(&out[range.clone()], rule.class);
            out.replace_range(range, &wrapped);
        }
    }
    out
}

/// Matches location plumbing: a leading `-->` arrow, the first
/// whitespace-then-`=` marker (with an optional ` note` tail), or the first
/// whitespace/digit gutter run ending in `|`.
fn match_location(line: &str) -> Option<Range<usize>> {
    let bytes = line.as_bytes();

    // Leading whitespace followed by `-->`.
    let ws = leading_whitespace(bytes);
    if ws > 0 && line[ws..].starts_with("-->") {
        return Some(0..ws + 3);
    }

    // Leftmost of the two unanchored alternatives; at equal positions the
    // `=` marker wins, matching the documented rule order.
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'=' {
                let mut end = j + 1;
                if line[end..].starts_with(" note") {
                    end += 5;
                }
                return Some(i..end);
            }
        }
        if bytes[i].is_ascii_whitespace() || bytes[i].is_ascii_digit() {
            let start = i;
            let mut j = i;
            while j < bytes.len() && (bytes[j].is_ascii_whitespace() || bytes[j].is_ascii_digit()) {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'|' {
                return Some(start..j + 1);
            }
        }
        i += 1;
    }
    None
}

/// Matches a leading whitespace run followed by `Compiling`.
fn match_progress(line: &str) -> Option<Range<usize>> {
    let ws = leading_whitespace(line.as_bytes());
    if ws > 0 && line[ws..].starts_with("Compiling") {
        Some(0..ws + "Compiling".len())
    } else {
        None
    }
}

/// Matches `prefix` at the very start of the line.
fn match_prefix(line: &str, prefix: &str) -> Option<Range<usize>> {
    line.starts_with(prefix).then(|| 0..prefix.len())
}

fn leading_whitespace(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count()
}
