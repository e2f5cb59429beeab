//! Section parsers: variable declarations with documentation, typed lists.
//!
//! Works on bracket nodes like `(:predicates (p1 ?x - t1) (p2))` and the
//! typed-list sections (`:types`, `:constants`, `:objects`).

use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;

use crate::parser::TokenKind;
use crate::syntax::SyntaxNode;

use super::OBJECT_TYPE;
use super::variable::Variable;

/// `[unit]` inside a documentation line.
static UNIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("unit pattern"));

/// One `name1 name2 - type` group of a typed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedGroup {
    pub names: Vec<SmolStr>,
    pub type_name: SmolStr,
}

/// Parse one `Variable` per top-level declaration bracket of a
/// `:predicates`/`:functions` section node, attaching documentation from
/// adjacent comments.
///
/// Comment attachment: comment lines directly above a declaration (each
/// separated by at most a single newline) accumulate top-to-bottom; a blank
/// line breaks the chain, so unrelated header comments never attach. A
/// trailing comment on the declaration's own line, or inside the
/// declaration bracket, is captured as well. A `[unit]` token in any
/// collected line sets the variable's unit (last match wins).
pub fn parse_variable_declarations(section: SyntaxNode<'_>) -> Vec<Variable> {
    let mut variables: Vec<Variable> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    // Declaration still on the current line; trailing comments attach to it.
    let mut open_declaration: Option<usize> = None;

    for child in section.children() {
        match child.kind() {
            TokenKind::Comment => {
                let text = clean_comment(child.token_text());
                match open_declaration {
                    Some(i) => variables[i].documentation.push(text),
                    None => pending.push(text),
                }
            }
            TokenKind::Whitespace => {
                let newlines = child.token_text().matches('\n').count();
                if newlines >= 1 {
                    open_declaration = None;
                }
                if newlines >= 2 {
                    pending.clear();
                }
            }
            kind if kind.is_open_bracket() => {
                let mut variable = Variable::from_text(strip_brackets(&child.non_comment_text()));
                variable.documentation = std::mem::take(&mut pending);
                // Inline comments inside the declaration bracket.
                for inner in child.descendants() {
                    if inner.kind() == TokenKind::Comment {
                        variable
                            .documentation
                            .push(clean_comment(inner.token_text()));
                    }
                }
                variables.push(variable);
                open_declaration = Some(variables.len() - 1);
            }
            _ => {}
        }
    }

    for variable in &mut variables {
        variable.unit = variable
            .documentation
            .iter()
            .flat_map(|line| UNIT_PATTERN.captures_iter(line))
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .last();
    }

    variables
}

/// Parse the `name1 name2 - parent` groups of a typed-list section text
/// (the comment-free text of a `:types`/`:constants`/`:objects` bracket).
/// Names with no trailing type fall into a final group with the default
/// `object` type. The section's own `:keyword` is skipped.
pub fn parse_typed_list(text: &str) -> Vec<TypedGroup> {
    let mut groups = Vec::new();
    let mut names: Vec<SmolStr> = Vec::new();
    let mut words = text
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|w| !w.is_empty())
        .skip_while(|w| w.starts_with(':'));

    while let Some(word) = words.next() {
        if word == "-" {
            let type_name = words.next().unwrap_or(OBJECT_TYPE);
            if !names.is_empty() {
                groups.push(TypedGroup {
                    names: std::mem::take(&mut names),
                    type_name: type_name.into(),
                });
            }
        } else {
            names.push(word.into());
        }
    }
    if !names.is_empty() {
        groups.push(TypedGroup {
            names,
            type_name: OBJECT_TYPE.into(),
        });
    }

    groups
}

fn clean_comment(text: &str) -> String {
    text.trim_start_matches(';').trim().to_string()
}

fn strip_brackets(text: &str) -> &str {
    text.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim()
}
