//! Logos-based lexer for PDDL.
//!
//! Raw lexing classifies every character into trivia, brackets, parameters,
//! keywords, dashes, and atoms; a second pass fuses `(` with an immediately
//! adjacent operator into a single [`TokenKind::OpenBracketOperator`] token.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::token::{Token, TokenKind};

/// Lexer wrapping the logos-generated tokenizer.
///
/// Yields raw tokens; `(`-operator fusion happens in [`tokenize`].
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let text = self.inner.slice();
        let start = TextSize::new(self.offset);
        self.offset += text.len() as u32;
        let range = TextRange::new(start, TextSize::new(self.offset));

        let kind = match raw {
            Ok(t) => t.into(),
            // Unlexable bytes degrade to atoms; the tokenizer never fails.
            Err(()) => TokenKind::Other,
        };

        Some(Token { kind, text, range })
    }
}

/// Tokenize PDDL text into a flat token sequence.
///
/// Tokens come out in strictly increasing, non-overlapping offset order and
/// their concatenated text equals the input exactly.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    fuse_operators(input, Lexer::new(input).collect())
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum RawToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+", priority = 5)]
    Whitespace,

    #[regex(r";[^\n\r]*", priority = 5)]
    Comment,

    // =========================================================================
    // BRACKETS
    // =========================================================================
    #[token("(")]
    OpenBracket,

    #[token(")")]
    CloseBracket,

    // =========================================================================
    // NAMES
    // =========================================================================
    #[regex(r"\?[a-zA-Z0-9_][a-zA-Z0-9_-]*", priority = 6)]
    Parameter,

    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*", priority = 6)]
    Keyword,

    #[token("-", priority = 6)]
    Dash,

    // Catch-all atom: identifiers, numbers, operators like `=` or `>=`,
    // and degenerate inputs such as a lone `?` or `:`.
    #[regex(r"[^ \t\r\n();]+", priority = 1)]
    Other,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Comment => TokenKind::Comment,
            RawToken::OpenBracket => TokenKind::OpenBracket,
            RawToken::CloseBracket => TokenKind::CloseBracket,
            RawToken::Parameter => TokenKind::Parameter,
            RawToken::Keyword => TokenKind::Keyword,
            RawToken::Dash => TokenKind::Dash,
            RawToken::Other => TokenKind::Other,
        }
    }
}

/// Bare operator words that, directly after `(`, form an operator bracket.
///
/// `at` and `over` are deliberately absent: they fuse only as the two-word
/// temporal operators (`at start`, `at end`, `over all`), because `at` is
/// also a perfectly ordinary predicate name.
fn is_operator_word(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    matches!(
        lower.as_str(),
        "define"
            | "domain"
            | "problem"
            | "and"
            | "or"
            | "not"
            | "when"
            | "imply"
            | "either"
            | "forall"
            | "exists"
            | "sumall"
            | "assign"
            | "increase"
            | "decrease"
            | "scale-up"
            | "scale-down"
            | "minimize"
            | "maximize"
            | "="
            | "<"
            | ">"
            | "<="
            | ">="
            | "+"
            | "-"
            | "*"
            | "/"
    )
}

/// Second word of a two-word temporal operator, keyed by the first word.
fn temporal_second_word(first: &str) -> Option<&'static [&'static str]> {
    if first.eq_ignore_ascii_case("at") {
        Some(&["start", "end"])
    } else if first.eq_ignore_ascii_case("over") {
        Some(&["all"])
    } else {
        None
    }
}

/// Fuse `(` tokens with an immediately adjacent operator into a single
/// `OpenBracketOperator` token. Adjacency means no gap: the operator starts
/// exactly where the `(` ends.
fn fuse_operators<'a>(input: &'a str, raw: Vec<Token<'a>>) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let tok = raw[i];
        if tok.kind != TokenKind::OpenBracket {
            tokens.push(tok);
            i += 1;
            continue;
        }

        let fused_len = operator_fusion_len(&raw, i);
        if fused_len == 0 {
            tokens.push(tok);
            i += 1;
            continue;
        }

        let end = raw[i + fused_len].range.end();
        let range = TextRange::new(tok.range.start(), end);
        tokens.push(Token::new(
            TokenKind::OpenBracketOperator,
            &input[range],
            range,
        ));
        i += fused_len + 1;
    }

    tokens
}

/// How many tokens after the `(` at `raw[open]` belong to its operator;
/// 0 when the bracket stays plain.
fn operator_fusion_len(raw: &[Token<'_>], open: usize) -> usize {
    let Some(next) = raw.get(open + 1) else {
        return 0;
    };
    if next.range.start() != raw[open].range.end() {
        return 0;
    }

    match next.kind {
        TokenKind::Keyword => 1,
        TokenKind::Dash => 1,
        TokenKind::Other => {
            // Two-word temporal operators span one internal whitespace run
            // (no newline).
            if let Some(seconds) = temporal_second_word(next.text) {
                if let (Some(ws), Some(word)) = (raw.get(open + 2), raw.get(open + 3)) {
                    let single_line_gap =
                        ws.kind == TokenKind::Whitespace && !ws.text.contains('\n');
                    if single_line_gap
                        && word.kind == TokenKind::Other
                        && seconds.iter().any(|s| word.text.eq_ignore_ascii_case(s))
                    {
                        return 3;
                    }
                }
            }
            if is_operator_word(next.text) { 1 } else { 0 }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_round_trip_concatenation() {
        let input = "(define (domain d)\n  (:types a b - c) ; note\n)";
        let text: String = tokenize(input).iter().map(|t| t.text).collect();
        assert_eq!(text, input);
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let input = "(:action a :parameters (?x - t))";
        let tokens = tokenize(input);
        let mut expected = 0u32;
        for tok in &tokens {
            assert_eq!(u32::from(tok.range.start()), expected);
            expected = tok.range.end().into();
        }
        assert_eq!(expected, input.len() as u32);
    }

    #[test]
    fn test_operator_brackets() {
        let tokens = tokenize("(:action (and (not (at start");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::OpenBracketOperator)
            .map(|t| t.text)
            .collect();
        assert_eq!(ops, vec!["(:action", "(and", "(not", "(at start"]);
    }

    #[test]
    fn test_at_predicate_stays_plain_bracket() {
        let tokens = tokenize("(at ?truck ?city)");
        assert_eq!(tokens[0].kind, TokenKind::OpenBracket);
        assert_eq!(tokens[0].text, "(");
    }

    #[test]
    fn test_whitespace_before_operator_stays_plain() {
        let tokens = tokenize("( and a b)");
        assert_eq!(tokens[0].kind, TokenKind::OpenBracket);
    }

    #[test]
    fn test_comment_to_end_of_line() {
        let tokens = tokenize("a ; rest (ignored\nb");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Other,
                TokenKind::Whitespace,
                TokenKind::Comment,
                TokenKind::Whitespace,
                TokenKind::Other,
            ]
        );
        assert_eq!(tokens[2].text, "; rest (ignored");
    }

    #[test]
    fn test_parameter_and_dash() {
        assert_eq!(
            kinds("?p1 ?p2 - type2"),
            vec![
                TokenKind::Parameter,
                TokenKind::Whitespace,
                TokenKind::Parameter,
                TokenKind::Whitespace,
                TokenKind::Dash,
                TokenKind::Whitespace,
                TokenKind::Other,
            ]
        );
    }

    #[test]
    fn test_dashed_identifier_is_one_atom() {
        let tokens = tokenize("truck-1");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Other);
    }

    #[test]
    fn test_negative_number_is_one_atom() {
        let tokens = tokenize("-5");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Other);
    }

    #[test]
    fn test_stray_close_bracket_never_fails() {
        let tokens = tokenize(")");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::CloseBracket);
    }

    #[test]
    fn test_lone_question_mark_degrades_to_atom() {
        let tokens = tokenize("? :");
        assert_eq!(tokens[0].kind, TokenKind::Other);
        assert_eq!(tokens[2].kind, TokenKind::Other);
    }

    #[test]
    fn test_arithmetic_operator_bracket() {
        let tokens = tokenize("(= (fuel) 5) (- x y)");
        assert_eq!(tokens[0].kind, TokenKind::OpenBracketOperator);
        assert_eq!(tokens[0].text, "(=");
        let minus = tokens
            .iter()
            .find(|t| t.text == "(-")
            .expect("fused minus bracket");
        assert_eq!(minus.kind, TokenKind::OpenBracketOperator);
    }

    #[test]
    fn test_keyword_outside_bracket() {
        let tokens = tokenize(":parameters (?x)");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, ":parameters");
    }
}
