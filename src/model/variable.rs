//! Lifted and grounded variables (predicates and functions).

use smol_str::SmolStr;
use thiserror::Error;

use super::OBJECT_TYPE;

/// A named placeholder with a type, e.g. `?truck - vehicle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name without the leading `?`.
    pub name: SmolStr,
    pub type_name: SmolStr,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// An untyped parameter; defaults to the `object` type.
    pub fn untyped(name: impl Into<SmolStr>) -> Self {
        Self::new(name, OBJECT_TYPE)
    }

    pub fn to_pddl(&self) -> String {
        format!("?{} - {}", self.name, self.type_name)
    }
}

/// A concrete object with its owning type, e.g. `truck1` of type `vehicle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInstance {
    pub name: SmolStr,
    pub type_name: SmolStr,
}

impl ObjectInstance {
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One term of a variable: a parameter placeholder (lifted) or a concrete
/// object (grounded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Parameter(Parameter),
    Object(ObjectInstance),
}

impl Term {
    pub fn type_name(&self) -> &str {
        match self {
            Term::Parameter(p) => &p.type_name,
            Term::Object(o) => &o.type_name,
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, Term::Object(_))
    }

    pub fn to_pddl(&self) -> String {
        match self {
            Term::Parameter(p) => p.to_pddl(),
            Term::Object(o) => o.name.to_string(),
        }
    }
}

/// Grounding substitution supplied the wrong number of objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("variable `{variable}` takes {expected} argument(s), {actual} supplied")]
pub struct BindingError {
    pub variable: String,
    pub expected: usize,
    pub actual: usize,
}

/// A predicate or function signature.
///
/// A *lifted* variable has [`Term::Parameter`] terms; a *grounded* one has
/// [`Term::Object`] terms. [`Variable::bind`] transforms lifted → grounded
/// by substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    declared_name: String,
    terms: Vec<Term>,
    /// Documentation collected from adjacent comment lines.
    pub documentation: Vec<String>,
    /// Unit parsed out of a `[...]` in the trailing documentation.
    pub unit: Option<String>,
}

impl Variable {
    pub fn new(declared_name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            declared_name: declared_name.into(),
            terms,
            documentation: Vec::new(),
            unit: None,
        }
    }

    /// Parse a declaration text such as `at ?truck - vehicle ?city - place`
    /// into a lifted variable. Whitespace is normalized in the stored
    /// declared name.
    pub fn from_text(text: &str) -> Self {
        let declared_name = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let terms = parse_parameters(text)
            .into_iter()
            .map(Term::Parameter)
            .collect();
        Self::new(declared_name, terms)
    }

    /// Full declared name + parameter text as written (whitespace
    /// normalized).
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// The stemmed name: the declared name without its parameter portion.
    pub fn name(&self) -> &str {
        self.declared_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.declared_name)
    }

    /// Name plus grounded/typed parameter text.
    pub fn full_name(&self) -> String {
        if self.terms.is_empty() {
            return self.name().to_string();
        }
        let terms: Vec<String> = self.terms.iter().map(Term::to_pddl).collect();
        format!("{} {}", self.name(), terms.join(" "))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Parameter count.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// A variable is grounded when every term is; a 0-ary variable counts
    /// as grounded.
    pub fn is_grounded(&self) -> bool {
        self.terms.iter().all(Term::is_grounded)
    }

    /// Substitute concrete objects for this variable's terms, preserving
    /// the declared name and documentation.
    ///
    /// The binding must supply exactly as many objects as the variable's
    /// parameter count.
    pub fn bind(&self, objects: &[ObjectInstance]) -> Result<Variable, BindingError> {
        if objects.len() != self.arity() {
            return Err(BindingError {
                variable: self.name().to_string(),
                expected: self.arity(),
                actual: objects.len(),
            });
        }
        let mut grounded = self.clone();
        grounded.terms = objects.iter().cloned().map(Term::Object).collect();
        Ok(grounded)
    }
}

/// Parse the `?name - type` groups out of a declaration text.
///
/// Supports the shorthand where multiple untyped parameters share one
/// trailing type (`?p1 ?p2 - type2` assigns `type2` to both). Parameters
/// with no trailing type default to `object`. Words without a leading `?`
/// (the declaration name itself) are skipped.
pub fn parse_parameters(text: &str) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = Vec::new();
    let mut untyped_from = 0;
    let mut words = text
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|w| !w.is_empty());

    while let Some(word) = words.next() {
        if let Some(name) = word.strip_prefix('?') {
            if !name.is_empty() {
                parameters.push(Parameter::untyped(name));
            }
        } else if word == "-" {
            if let Some(type_name) = words.next() {
                for parameter in &mut parameters[untyped_from..] {
                    parameter.type_name = type_name.into();
                }
                untyped_from = parameters.len();
            }
        }
    }

    parameters
}
