//! Node cursor and the syntax-tree query API.
//!
//! [`SyntaxNode`] is a cheap copyable cursor (tree reference + arena index).
//! All navigation — children, ancestors, enclosing brackets, parameter
//! scopes — happens through it. Queries are best-effort by design: editor
//! features calling them must keep working on partial or invalid input, so
//! "not found" is an `Option`, and only the `_or_err` variants escalate a
//! structural absence into an error.

use regex::Regex;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::parser::TokenKind;

use super::tree::{NodeId, SyntaxTree};

/// Constructs that introduce a parameter scope (`?x` binders).
const PARAMETRISABLE_SCOPES: &[&str] = &[
    ":action",
    ":durative-action",
    ":process",
    ":event",
    ":derived",
    "forall",
    "exists",
    "sumall",
];

/// A required child node was absent.
///
/// Raised only by the `_or_err` accessors, at call sites where the
/// construct's presence is a hard precondition (e.g. the `define` root of a
/// file known to be a domain). Caller-recoverable, never process-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required {kind:?} child matching `{pattern}`")]
pub struct MissingNodeError {
    pub kind: TokenKind,
    pub pattern: String,
}

/// A cursor over one node of a [`SyntaxTree`].
#[derive(Debug, Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl<'t> SyntaxNode<'t> {
    pub(super) fn new(tree: &'t SyntaxTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn kind(&self) -> TokenKind {
        self.tree.data(self.id).kind
    }

    pub fn is_document(&self) -> bool {
        self.kind() == TokenKind::Document
    }

    /// Whether this node is a bracket node (plain or operator).
    pub fn is_bracket(&self) -> bool {
        self.kind().is_open_bracket()
    }

    /// Whether this bracket node has seen its matching close bracket.
    /// Non-bracket nodes report `false`.
    pub fn is_closed(&self) -> bool {
        self.tree.data(self.id).close.is_some()
    }

    /// Range of this node's own token (excluding children and close).
    pub fn token_range(&self) -> TextRange {
        self.tree.data(self.id).token
    }

    /// Text of this node's own token. Empty for the document root.
    pub fn token_text(&self) -> &'t str {
        &self.tree.source()[self.token_range()]
    }

    /// Range of the matching close bracket, once observed.
    pub fn close_range(&self) -> Option<TextRange> {
        self.tree.data(self.id).close
    }

    pub fn start(&self) -> TextSize {
        self.token_range().start()
    }

    /// End offset: the maximum of this node's token end, all descendants'
    /// ends, and the close bracket.
    pub fn end(&self) -> TextSize {
        self.tree.data(self.id).end
    }

    /// Full range of this node including descendants and close bracket.
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start(), self.end())
    }

    /// Full text of this node: its token, all children in document order,
    /// and the close bracket if present.
    pub fn text(&self) -> &'t str {
        &self.tree.source()[self.range()]
    }

    /// Like [`Self::text`], with all comments stripped out. Used by
    /// documentation extraction and declaration parsing.
    pub fn non_comment_text(&self) -> String {
        let mut out = String::new();
        self.collect_non_comment(&mut out);
        out
    }

    fn collect_non_comment(&self, out: &mut String) {
        if self.kind() != TokenKind::Comment {
            out.push_str(self.token_text());
        }
        for child in self.children() {
            child.collect_non_comment(out);
        }
        if let Some(close) = self.close_range() {
            out.push_str(&self.tree.source()[close]);
        }
    }

    /// The operator of an operator bracket, e.g. `:action`, `and`,
    /// `at start`. `None` for every other node kind.
    pub fn operator(&self) -> Option<&'t str> {
        if self.kind() == TokenKind::OpenBracketOperator {
            self.token_text().strip_prefix('(')
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        let parent = self.tree.data(self.id).parent?;
        Some(SyntaxNode::new(self.tree, parent))
    }

    /// Direct children in document order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'t>> + use<'t> {
        let tree = self.tree;
        self.tree
            .data(self.id)
            .children
            .iter()
            .map(move |&id| SyntaxNode::new(tree, id))
    }

    /// Direct children with `Whitespace` nodes filtered out (one level;
    /// comments are kept).
    pub fn non_whitespace_children(&self) -> impl Iterator<Item = SyntaxNode<'t>> + use<'t> {
        self.children().filter(|c| c.kind() != TokenKind::Whitespace)
    }

    /// All descendants in depth-first pre-order, excluding this node.
    pub fn descendants(&self) -> Descendants<'t> {
        let mut stack: Vec<NodeId> = self.tree.data(self.id).children.clone();
        stack.reverse();
        Descendants {
            tree: self.tree,
            stack,
        }
    }

    /// Descendants matching a fallible test.
    ///
    /// An `Err` from the test counts as no-match for that node and the
    /// traversal continues: queries over partial input must not abort the
    /// whole walk because one node is malformed.
    pub fn descendants_where<E>(
        &self,
        mut test: impl FnMut(&SyntaxNode<'t>) -> Result<bool, E>,
    ) -> Vec<SyntaxNode<'t>> {
        self.descendants()
            .filter(|node| test(node).unwrap_or(false))
            .collect()
    }

    /// First direct child with the given token kind whose token text
    /// matches `pattern`.
    pub fn first_child(&self, kind: TokenKind, pattern: &Regex) -> Option<SyntaxNode<'t>> {
        self.children()
            .find(|c| c.kind() == kind && pattern.is_match(c.token_text()))
    }

    /// Like [`Self::first_child`], erroring when the child is absent.
    pub fn first_child_or_err(
        &self,
        kind: TokenKind,
        pattern: &Regex,
    ) -> Result<SyntaxNode<'t>, MissingNodeError> {
        self.first_child(kind, pattern).ok_or_else(|| MissingNodeError {
            kind,
            pattern: pattern.as_str().to_string(),
        })
    }

    /// First direct operator-bracket child whose operator equals `keyword`
    /// (case-insensitive), e.g. `first_open_bracket(":types")` finds the
    /// `(:types ...)` section.
    pub fn first_open_bracket(&self, keyword: &str) -> Option<SyntaxNode<'t>> {
        self.children()
            .find(|c| c.operator().is_some_and(|op| op.eq_ignore_ascii_case(keyword)))
    }

    /// Resolve the `:keyword (bracket ...)` idiom, e.g.
    /// `keyword_open_bracket("precondition")` on an action node finds the
    /// `(and ...)` bracket following the `:precondition` keyword.
    ///
    /// The scan stops at the next `Keyword` child so an empty-bodied
    /// keyword never steals the following section's bracket.
    pub fn keyword_open_bracket(&self, keyword: &str) -> Option<SyntaxNode<'t>> {
        let mut found = false;
        for child in self.non_whitespace_children() {
            if child.kind() == TokenKind::Keyword {
                if found {
                    return None;
                }
                found = child
                    .token_text()
                    .strip_prefix(':')
                    .is_some_and(|k| k.eq_ignore_ascii_case(keyword));
                continue;
            }
            if found && child.is_bracket() {
                return Some(child);
            }
        }
        None
    }

    /// Walk up via parent links to the nearest enclosing bracket node
    /// (including this node itself). `None` when the walk reaches the
    /// document root without finding one.
    pub fn expand(&self) -> Option<SyntaxNode<'t>> {
        let mut node = *self;
        loop {
            if node.is_bracket() {
                return Some(node);
            }
            node = node.parent()?;
        }
    }

    /// Find the nearest enclosing scope-introducing construct that declares
    /// `?parameter_name`.
    ///
    /// Only the fixed whitelist of scope constructs is considered
    /// (`:action`, `:durative-action`, `:process`, `:event`, `:derived`,
    /// `forall`, `exists`, `sumall`). When no enclosing scope declares the
    /// parameter, the immediate parent is returned as a graceful fallback
    /// (or this node itself at the document root).
    pub fn find_parametrisable_scope(&self, parameter_name: &str) -> SyntaxNode<'t> {
        let mut node = *self;
        while let Some(parent) = node.parent() {
            node = parent;
            if node.is_parametrisable_scope() && node.declares_parameter(parameter_name) {
                return node;
            }
        }
        self.parent().unwrap_or(*self)
    }

    fn is_parametrisable_scope(&self) -> bool {
        self.operator().is_some_and(|op| {
            PARAMETRISABLE_SCOPES
                .iter()
                .any(|scope| op.eq_ignore_ascii_case(scope))
        })
    }

    /// The bracket holding this scope's parameter declarations:
    /// `:parameters (...)` for action-family constructs, the first bracket
    /// child for `forall`/`exists`/`sumall` and the `:derived` head.
    fn parameter_definition(&self) -> Option<SyntaxNode<'t>> {
        let op = self.operator()?;
        if op.starts_with(':') && !op.eq_ignore_ascii_case(":derived") {
            self.keyword_open_bracket("parameters")
        } else {
            self.non_whitespace_children().find(|c| c.is_bracket())
        }
    }

    fn declares_parameter(&self, parameter_name: &str) -> bool {
        let name = parameter_name.trim_start_matches('?');
        self.parameter_definition().is_some_and(|params| {
            params
                .text()
                .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
                .any(|word| {
                    word.strip_prefix('?')
                        .is_some_and(|w| w.eq_ignore_ascii_case(name))
                })
        })
    }
}

/// Depth-first pre-order descendant iterator.
pub struct Descendants<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = SyntaxNode::new(self.tree, id);
        let children = &self.tree.data(id).children;
        self.stack.extend(children.iter().rev());
        Some(node)
    }
}
