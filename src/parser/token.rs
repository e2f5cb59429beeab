//! Token kinds and the token type produced by the lexer.

use text_size::TextRange;

/// All token kinds in PDDL source text.
///
/// This is a closed enumeration: every character of the input belongs to
/// exactly one token of one of these kinds (except `Document`, which is
/// only ever the kind of the synthetic tree root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// The synthetic document root; never produced by the lexer.
    Document,
    /// A plain `(`.
    OpenBracket,
    /// A `(` immediately followed by a recognized operator, e.g. `(:action`,
    /// `(and`, `(forall`, `(at start`. The token text includes the operator.
    OpenBracketOperator,
    /// A `)`. Matching is resolved by the tree builder, not the lexer.
    CloseBracket,
    /// A `:`-prefixed keyword outside an open-bracket-operator, e.g.
    /// `:parameters`.
    Keyword,
    /// A `?`-prefixed parameter name, e.g. `?truck`. Text includes the `?`.
    Parameter,
    /// A standalone `-`, the typed-list separator.
    Dash,
    /// A `;` comment running to end-of-line (exclusive of the newline).
    Comment,
    /// A run of whitespace (space, tab, CR, LF), collapsed into one token.
    Whitespace,
    /// Anything else: identifiers, numbers, operators like `=`.
    Other,
}

impl TokenKind {
    /// Whether this kind opens a bracket node in the syntax tree.
    pub fn is_open_bracket(&self) -> bool {
        matches!(self, Self::OpenBracket | Self::OpenBracketOperator)
    }

    /// Whether this kind is trivia (whitespace or comment).
    pub fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }
}

/// A token with its kind, text, and byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, range: TextRange) -> Self {
        Self { kind, text, range }
    }
}
