//! Arena-backed syntax tree and the stack-based builder.

use text_size::{TextRange, TextSize};

use crate::parser::{TokenKind, tokenize};

use super::node::{MissingNodeError, SyntaxNode};

/// Index of a node in the tree's arena.
///
/// Node identity is stable for the lifetime of the tree: nodes are never
/// moved to a different parent after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    pub(super) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of the arena.
///
/// The owning direction is strictly parent→children; `parent` is a
/// non-owning back index used for navigation only.
#[derive(Debug, Clone)]
pub(super) struct NodeData {
    pub(super) kind: TokenKind,
    /// Range of this node's own token. Empty at offset 0 for the root.
    pub(super) token: TextRange,
    /// The matching close bracket, once observed. `None` means either
    /// "not a bracket node" or "bracket still open".
    pub(super) close: Option<TextRange>,
    /// End offset including all descendants and the close bracket.
    pub(super) end: TextSize,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

/// A parsed PDDL syntax tree.
///
/// Owns the source text and the node arena. Rebuilt from scratch on every
/// re-parse; there are no incremental edits.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Tokenize and parse `text` into a tree. Never fails: unbalanced
    /// brackets are recovered per the builder's resilience policy.
    pub fn new(text: impl Into<String>) -> Self {
        let source = text.into();
        let nodes = build(&source);
        Self { source, nodes }
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The document root node.
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self, NodeId(0))
    }

    /// The deepest node containing `offset`.
    ///
    /// A node contains an offset when the offset is strictly after the
    /// node's start and at or before its end, so a cursor sitting right
    /// after a word still finds that word. Offsets outside every child
    /// resolve to the document root.
    pub fn node_at(&self, offset: TextSize) -> SyntaxNode<'_> {
        let mut node = self.root();
        'descend: loop {
            for child in node.children() {
                if child.start() < offset && offset <= child.end() {
                    node = child;
                    continue 'descend;
                }
            }
            return node;
        }
    }

    /// The `(define ...)` node, when the document has one.
    pub fn define_node(&self) -> Option<SyntaxNode<'_>> {
        self.root().first_open_bracket("define")
    }

    /// The `(define ...)` node, for files known to be a domain or problem.
    pub fn define_node_or_err(&self) -> Result<SyntaxNode<'_>, MissingNodeError> {
        self.define_node().ok_or_else(|| MissingNodeError {
            kind: TokenKind::OpenBracketOperator,
            pattern: "(define".to_string(),
        })
    }

    pub(super) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Build the node arena from the token stream.
///
/// Maintains an explicit stack of open nodes with the document root at the
/// bottom. Bracket nesting is determined purely by bracket balance, never
/// by keyword semantics.
fn build(source: &str) -> Vec<NodeData> {
    let mut nodes = vec![NodeData {
        kind: TokenKind::Document,
        token: TextRange::empty(TextSize::new(0)),
        close: None,
        end: TextSize::new(0),
        parent: None,
        children: Vec::new(),
    }];
    let mut stack = vec![NodeId(0)];

    for token in tokenize(source) {
        match token.kind {
            kind if kind.is_open_bracket() => {
                let id = append(&mut nodes, *stack.last().unwrap_or(&NodeId(0)), kind, token.range);
                stack.push(id);
            }
            TokenKind::CloseBracket => {
                if stack.len() > 1 {
                    let id = stack.pop().unwrap_or(NodeId(0));
                    let data = &mut nodes[id.index()];
                    data.close = Some(token.range);
                    data.end = token.range.end();
                } else {
                    // Over-closed input: the stray close bracket still lands
                    // in the tree as an ordinary child of the document root.
                    append(&mut nodes, NodeId(0), TokenKind::CloseBracket, token.range);
                }
            }
            kind => {
                append(&mut nodes, *stack.last().unwrap_or(&NodeId(0)), kind, token.range);
            }
        }
    }
    // Anything left on the stack stays unclosed; no synthetic close
    // bracket is fabricated.

    finalize_ends(&mut nodes);
    nodes
}

fn append(nodes: &mut Vec<NodeData>, parent: NodeId, kind: TokenKind, token: TextRange) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(NodeData {
        kind,
        token,
        close: None,
        end: token.end(),
        parent: Some(parent),
        children: Vec::new(),
    });
    nodes[parent.index()].children.push(id);
    id
}

/// Single bottom-up pass setting every node's end to the maximum of its own
/// end and its descendants' ends. Children always have a higher arena index
/// than their parent, so one reverse sweep suffices.
fn finalize_ends(nodes: &mut [NodeData]) {
    for i in (1..nodes.len()).rev() {
        let end = nodes[i].end;
        if let Some(parent) = nodes[i].parent {
            let parent = &mut nodes[parent.index()];
            if parent.end < end {
                parent.end = end;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_text_round_trips() {
        let input = "(define (domain d) ; doc\n  (:types a b - c))";
        let tree = SyntaxTree::new(input);
        assert_eq!(tree.root().text(), input);
    }

    #[test]
    fn test_extra_close_bracket_attaches_to_root() {
        let tree = SyntaxTree::new("(a))");
        let root = tree.root();
        let kinds: Vec<_> = root.children().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![TokenKind::OpenBracket, TokenKind::CloseBracket]);
        assert_eq!(root.text(), "(a))");
    }

    #[test]
    fn test_unclosed_bracket_stays_open() {
        let tree = SyntaxTree::new("(define (domain d)");
        let define = tree.root().children().next().expect("define node");
        assert!(!define.is_closed());
        let domain = define
            .children()
            .find(|c| c.kind().is_open_bracket())
            .expect("domain node");
        assert!(domain.is_closed());
    }

    #[test]
    fn test_node_at_finds_deepest() {
        let input = "(define (domain logistics))";
        let tree = SyntaxTree::new(input);
        let offset = TextSize::new(input.find("logistics").unwrap() as u32 + 3);
        let node = tree.node_at(offset);
        assert_eq!(node.token_text(), "logistics");
    }

    #[test]
    fn test_node_at_outside_any_child_is_root() {
        let tree = SyntaxTree::new("(a)");
        assert_eq!(tree.node_at(TextSize::new(0)).kind(), TokenKind::Document);
    }

    #[test]
    fn test_end_offsets_cover_descendants() {
        let input = "(a (b (c";
        let tree = SyntaxTree::new(input);
        let outer = tree.root().children().next().expect("outer");
        assert_eq!(u32::from(outer.end()), input.len() as u32);
    }
}
