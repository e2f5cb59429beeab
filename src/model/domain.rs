//! Domain model extraction and symbol lookup.

use smol_str::SmolStr;
use text_size::TextRange;
use tracing::debug;

use crate::base::{LineIndex, Span};
use crate::parser::TokenKind;
use crate::syntax::{SyntaxNode, SyntaxTree};

use super::graph::TypeInheritanceGraph;
use super::references;
use super::section::{parse_typed_list, parse_variable_declarations};
use super::type_map::TypeObjectMap;
use super::variable::{Parameter, Variable, parse_parameters};
use super::OBJECT_TYPE;

/// An `:action` or `:durative-action` header.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: SmolStr,
    pub parameters: Vec<Parameter>,
    pub durative: bool,
    /// Comment lines directly above the action.
    pub documentation: Vec<String>,
    /// Location of the whole action bracket, for reveal/navigation.
    pub span: Span,
}

/// What kind of variable a name resolves to.
///
/// `Undecided` is the explicit outcome for a name declared nowhere: the
/// caller cannot tell whether an undeclared symbol was meant as a predicate
/// or a function, and must handle that rather than guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Predicate,
    Function,
    Derived,
    Undecided,
}

/// A resolved symbol, discriminated by what declared it.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolInfo<'a> {
    Variable {
        variable: &'a Variable,
        kind: VariableKind,
    },
    Type {
        name: &'a str,
    },
    Action {
        action: &'a Action,
    },
    Parameter {
        /// Parameter name without the leading `?`. Its declaration is
        /// resolved positionally via
        /// [`SyntaxNode::find_parametrisable_scope`], not by name lookup.
        name: SmolStr,
    },
}

/// Read-mostly symbol table for one PDDL domain file.
///
/// Rebuilt whenever the owning file's tree is rebuilt; extraction is
/// best-effort and never fails — missing or malformed sections simply
/// yield empty collections.
#[derive(Debug, Clone)]
pub struct DomainModel {
    pub uri: String,
    pub name: SmolStr,
    /// `:requirements` flags in declaration order.
    pub requirements: Vec<SmolStr>,
    pub type_inheritance: TypeInheritanceGraph,
    pub constants: TypeObjectMap,
    pub predicates: Vec<Variable>,
    pub functions: Vec<Variable>,
    pub derived: Vec<Variable>,
    pub actions: Vec<Action>,
    types_section: Option<TextRange>,
    text: String,
    line_index: LineIndex,
}

impl DomainModel {
    /// Parse `text` into a domain model (builds a fresh syntax tree).
    pub fn parse(uri: impl Into<String>, text: &str) -> Self {
        let tree = SyntaxTree::new(text);
        Self::from_tree(uri, &tree)
    }

    /// Extract the model from an already-built tree.
    pub fn from_tree(uri: impl Into<String>, tree: &SyntaxTree) -> Self {
        let text = tree.source().to_string();
        let line_index = LineIndex::new(&text);
        let mut model = DomainModel {
            uri: uri.into(),
            name: SmolStr::default(),
            requirements: Vec::new(),
            type_inheritance: TypeInheritanceGraph::new(),
            constants: TypeObjectMap::new(),
            predicates: Vec::new(),
            functions: Vec::new(),
            derived: Vec::new(),
            actions: Vec::new(),
            types_section: None,
            text,
            line_index,
        };

        let Some(define) = tree.define_node() else {
            debug!(uri = %model.uri, "no (define ...) found; domain model is empty");
            return model;
        };

        if let Some(domain) = define.first_open_bracket("domain") {
            if let Some(name) = first_name(&domain) {
                model.name = name.into();
            }
        }

        if let Some(requirements) = define.first_open_bracket(":requirements") {
            model.requirements = requirements
                .non_whitespace_children()
                .filter(|c| c.kind() == TokenKind::Keyword)
                .map(|c| SmolStr::from(c.token_text()))
                .collect();
        }

        if let Some(types) = define.first_open_bracket(":types") {
            model.types_section = Some(types.range());
            for group in parse_typed_list(&types.non_comment_text()) {
                // Register names before the parent so declaration order wins.
                for name in &group.names {
                    model.type_inheritance.add_vertex(name);
                }
                for name in &group.names {
                    model.type_inheritance.add_edge(name, &group.type_name);
                }
            }
        }

        if let Some(constants) = define.first_open_bracket(":constants") {
            for group in parse_typed_list(&constants.non_comment_text()) {
                model
                    .constants
                    .add_all(&group.type_name, group.names.iter().map(|n| n.as_str()));
            }
        }

        if let Some(predicates) = define.first_open_bracket(":predicates") {
            model.predicates = parse_variable_declarations(predicates);
        }
        if let Some(functions) = define.first_open_bracket(":functions") {
            model.functions = parse_variable_declarations(functions);
        }

        for child in define.non_whitespace_children() {
            let Some(op) = child.operator() else { continue };
            if op.eq_ignore_ascii_case(":derived") {
                if let Some(head) = child.non_whitespace_children().find(|c| c.is_bracket()) {
                    let head_text = head.non_comment_text();
                    model.derived.push(Variable::from_text(
                        head_text.trim().trim_start_matches('(').trim_end_matches(')'),
                    ));
                }
            } else if op.eq_ignore_ascii_case(":action") {
                model.extract_action(child, false);
            } else if op.eq_ignore_ascii_case(":durative-action") {
                model.extract_action(child, true);
            }
        }

        debug!(
            uri = %model.uri,
            name = %model.name,
            predicates = model.predicates.len(),
            functions = model.functions.len(),
            actions = model.actions.len(),
            "extracted domain model"
        );
        model
    }

    fn extract_action(&mut self, node: SyntaxNode<'_>, durative: bool) {
        let Some(name) = first_name(&node) else {
            // Mid-edit action header without a name yet.
            debug!(uri = %self.uri, "skipping unnamed action");
            return;
        };
        let parameters = node
            .keyword_open_bracket("parameters")
            .map(|p| parse_parameters(&p.non_comment_text()))
            .unwrap_or_default();
        self.actions.push(Action {
            name: name.into(),
            parameters,
            durative,
            documentation: preceding_comments(node),
            span: self.line_index.span(node.range()),
        });
    }

    /// Declared type names in declaration order, excluding the implicit
    /// `object` root.
    pub fn types(&self) -> Vec<&str> {
        self.type_inheritance
            .vertices()
            .filter(|t| !t.eq_ignore_ascii_case(OBJECT_TYPE))
            .collect()
    }

    pub fn is_type(&self, name: &str) -> bool {
        self.type_inheritance.contains(name)
    }

    /// Case-insensitive lookup across predicates, functions, and derived
    /// predicates.
    pub fn find_variable(&self, name: &str) -> Option<&Variable> {
        find_in(&self.predicates, name)
            .or_else(|| find_in(&self.functions, name))
            .or_else(|| find_in(&self.derived, name))
    }

    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Classify a variable name. Names declared nowhere come back as
    /// [`VariableKind::Undecided`]; callers handle that (log and skip)
    /// rather than guessing.
    pub fn variable_kind(&self, name: &str) -> VariableKind {
        if find_in(&self.predicates, name).is_some() {
            VariableKind::Predicate
        } else if find_in(&self.functions, name).is_some() {
            VariableKind::Function
        } else if find_in(&self.derived, name).is_some() {
            VariableKind::Derived
        } else {
            debug!(uri = %self.uri, name, "cannot decide whether symbol is a predicate or function");
            VariableKind::Undecided
        }
    }

    /// Resolve a name across predicates, functions, derived predicates,
    /// actions, and types (all case-insensitive). `?`-prefixed names are
    /// parameters; their declaration is positional, not name-keyed.
    pub fn find_symbol(&self, name: &str) -> Option<SymbolInfo<'_>> {
        if let Some(parameter) = name.strip_prefix('?') {
            return Some(SymbolInfo::Parameter {
                name: parameter.into(),
            });
        }
        if let Some(variable) = self.find_variable(name) {
            return Some(SymbolInfo::Variable {
                variable,
                kind: self.variable_kind(name),
            });
        }
        if let Some(action) = self.find_action(name) {
            return Some(SymbolInfo::Action { action });
        }
        self.type_inheritance
            .vertices()
            .find(|t| t.eq_ignore_ascii_case(name))
            .map(|name| SymbolInfo::Type { name })
    }

    /// All references to a variable, in document order; the declaration's
    /// own range comes first. Commented-out usages are never counted.
    pub fn variable_references(&self, variable: &Variable) -> Vec<Span> {
        references::variable_references(&self.text, variable.name())
    }

    /// All typed-position references to a type (`- name` occurrences).
    pub fn type_references(&self, name: &str) -> Vec<Span> {
        references::type_references(&self.text, name)
    }

    /// The declaration location of a type inside the `:types` section.
    pub fn type_location(&self, name: &str) -> Option<Span> {
        let section = self.types_section?;
        references::type_location(&self.text, &self.line_index, section, name)
    }
}

fn find_in<'a>(variables: &'a [Variable], name: &str) -> Option<&'a Variable> {
    variables
        .iter()
        .find(|v| v.name().eq_ignore_ascii_case(name))
}

/// First plain-atom child: the declared name of a `(domain d)` /
/// `(:action name ...)` style bracket.
fn first_name<'t>(node: &SyntaxNode<'t>) -> Option<&'t str> {
    node.non_whitespace_children()
        .find(|c| c.kind() == TokenKind::Other)
        .map(|c| c.token_text())
}

/// Comment lines directly above a node, walking back through alternating
/// (single-newline whitespace, comment) siblings. A blank line breaks the
/// chain. Returned top-to-bottom.
fn preceding_comments(node: SyntaxNode<'_>) -> Vec<String> {
    let Some(parent) = node.parent() else {
        return Vec::new();
    };
    let siblings: Vec<_> = parent.children().collect();
    let Some(mut i) = siblings.iter().position(|s| *s == node) else {
        return Vec::new();
    };

    let mut comments = Vec::new();
    while i >= 2 {
        let whitespace = &siblings[i - 1];
        if whitespace.kind() != TokenKind::Whitespace
            || whitespace.token_text().matches('\n').count() >= 2
        {
            break;
        }
        let comment = &siblings[i - 2];
        if comment.kind() != TokenKind::Comment {
            break;
        }
        comments.push(comment.token_text().trim_start_matches(';').trim().to_string());
        i -= 2;
    }
    comments.reverse();
    comments
}
