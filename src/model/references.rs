//! Line-oriented regex reference scanning.
//!
//! This deliberately scans raw text rather than querying the tree: during
//! active editing the document is often syntactically broken, and the
//! reference/rename features must keep answering. Comments are stripped
//! per line (everything from `;` onward), so commented-out usages are
//! never counted. All matching is case-insensitive.

use regex::Regex;
use text_size::{TextRange, TextSize};

use crate::base::{LineIndex, Span};

/// All references to a variable (predicate/function) named `name`:
/// occurrences of `(name` followed by a delimiter. Spans bound the name
/// itself, in document order, so the declaration comes first.
pub(crate) fn variable_references(text: &str, name: &str) -> Vec<Span> {
    let Ok(pattern) = Regex::new(&format!(
        r"(?i)(\(\s*)({})([\s)]|$)",
        regex::escape(name)
    )) else {
        return Vec::new();
    };
    scan_lines(text, &pattern)
}

/// All typed-position references to a type named `name`: occurrences
/// following the `-` of a typed list. Spans bound the name itself.
pub(crate) fn type_references(text: &str, name: &str) -> Vec<Span> {
    let Ok(pattern) = Regex::new(&format!(
        r"(?i)(^|[\s(])-\s*({})([\s()]|$)",
        regex::escape(name)
    )) else {
        return Vec::new();
    };
    scan_lines(text, &pattern)
}

/// The declaration location of a type inside the `:types` section range.
pub(crate) fn type_location(
    text: &str,
    index: &LineIndex,
    section: TextRange,
    name: &str,
) -> Option<Span> {
    let pattern = Regex::new(&format!(
        r"(?i)(^|[\s(])({})([\s()]|$)",
        regex::escape(name)
    ))
    .ok()?;

    let slice = &text[section];
    let mut offset = usize::from(section.start());
    for line in slice.split_inclusive('\n') {
        let code = strip_line_comment(line);
        if let Some(captures) = pattern.captures(code) {
            let matched = captures.get(2)?;
            let range = TextRange::new(
                TextSize::new((offset + matched.start()) as u32),
                TextSize::new((offset + matched.end()) as u32),
            );
            return Some(index.span(range));
        }
        offset += line.len();
    }
    None
}

/// Run a pattern over every comment-stripped line; the span of capture
/// group 2 is reported per match.
fn scan_lines(text: &str, pattern: &Regex) -> Vec<Span> {
    let mut spans = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let code = strip_line_comment(line);
        for captures in pattern.captures_iter(code) {
            if let Some(matched) = captures.get(2) {
                spans.push(Span::from_coords(
                    line_no,
                    matched.start(),
                    line_no,
                    matched.end(),
                ));
            }
        }
    }
    spans
}

fn strip_line_comment(line: &str) -> &str {
    match line.find(';') {
        Some(i) => &line[..i],
        None => line,
    }
}
