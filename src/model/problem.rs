//! Problem model extraction.

use smol_str::SmolStr;
use tracing::debug;

use crate::syntax::SyntaxTree;

use super::domain::DomainModel;
use super::section::parse_typed_list;
use super::type_map::TypeObjectMap;

/// Read-mostly symbol table for one PDDL problem file.
///
/// Carries what the grounder and the cross-file features need: the declared
/// problem name, the target domain name, and the `:objects` section.
#[derive(Debug, Clone)]
pub struct ProblemModel {
    pub uri: String,
    pub name: SmolStr,
    /// Name of the domain this problem targets (`(:domain ...)`).
    pub domain_name: SmolStr,
    pub objects: TypeObjectMap,
}

impl ProblemModel {
    /// Parse `text` into a problem model (builds a fresh syntax tree).
    pub fn parse(uri: impl Into<String>, text: &str) -> Self {
        let tree = SyntaxTree::new(text);
        Self::from_tree(uri, &tree)
    }

    /// Extract the model from an already-built tree. Best-effort: missing
    /// sections yield empty fields.
    pub fn from_tree(uri: impl Into<String>, tree: &SyntaxTree) -> Self {
        let mut model = ProblemModel {
            uri: uri.into(),
            name: SmolStr::default(),
            domain_name: SmolStr::default(),
            objects: TypeObjectMap::new(),
        };

        let Some(define) = tree.define_node() else {
            debug!(uri = %model.uri, "no (define ...) found; problem model is empty");
            return model;
        };

        if let Some(problem) = define.first_open_bracket("problem") {
            if let Some(name) = first_atom(problem) {
                model.name = name.into();
            }
        }
        if let Some(domain) = define.first_open_bracket(":domain") {
            if let Some(name) = first_atom(domain) {
                model.domain_name = name.into();
            }
        }
        if let Some(objects) = define.first_open_bracket(":objects") {
            for group in parse_typed_list(&objects.non_comment_text()) {
                model
                    .objects
                    .add_all(&group.type_name, group.names.iter().map(|n| n.as_str()));
            }
        }

        model
    }

    /// Whether this problem targets `domain` (case-insensitive name match).
    pub fn is_for_domain(&self, domain: &DomainModel) -> bool {
        !self.domain_name.is_empty() && self.domain_name.eq_ignore_ascii_case(&domain.name)
    }
}

fn first_atom(node: crate::syntax::SyntaxNode<'_>) -> Option<&str> {
    node.non_whitespace_children()
        .find(|c| c.kind() == crate::parser::TokenKind::Other)
        .map(|c| c.token_text())
}
