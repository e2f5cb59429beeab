//! Grounding: expanding a lifted variable into all grounded instances.
//!
//! Constructed fresh per (domain, problem) pair; stateless beyond the
//! cached concatenation of domain constants and problem objects.

use thiserror::Error;
use tracing::warn;

use crate::model::{DomainModel, ObjectInstance, ProblemModel, TypeObjectMap, Variable};

/// The maximum parameter arity `ground` enumerates fully.
const MAX_GROUND_ARITY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroundingError {
    /// Full enumeration is only implemented up to the documented arity;
    /// callers degrade gracefully (e.g. skip visualization) instead of
    /// failing the parse.
    #[error("object permutations are not implemented for {0} types")]
    UnsupportedArity(usize),
}

/// Expands lifted variables over the objects of one (domain, problem) pair.
pub struct Grounder<'a> {
    domain: &'a DomainModel,
    /// Domain constants merged with problem objects.
    all_objects: TypeObjectMap,
}

impl<'a> Grounder<'a> {
    pub fn new(domain: &'a DomainModel, problem: &'a ProblemModel) -> Self {
        Self {
            domain,
            all_objects: domain.constants.merge(&problem.objects),
        }
    }

    /// All grounded instances of `variable`.
    ///
    /// - arity 0: the variable itself, unchanged
    /// - arity 1–2: the Cartesian product of eligible objects per parameter
    ///   type, row-major (outer loop over the first parameter's objects in
    ///   declaration order)
    /// - arity 3+: not supported; returns an empty vec so callers skip the
    ///   variable rather than fail
    ///
    /// Eligible objects for a type are those declared under the type itself
    /// or under any type transitively inheriting from it.
    pub fn ground(&self, variable: &Variable) -> Vec<Variable> {
        let types: Vec<&str> = variable.terms().iter().map(|t| t.type_name()).collect();
        match types.as_slice() {
            [] => vec![variable.clone()],
            [t0] => self
                .eligible_objects(t0)
                .into_iter()
                .filter_map(|o| variable.bind(&[o]).ok())
                .collect(),
            [t0, t1] => {
                let first = self.eligible_objects(t0);
                let second = self.eligible_objects(t1);
                let mut grounded = Vec::with_capacity(first.len() * second.len());
                for a in &first {
                    for b in &second {
                        if let Ok(v) = variable.bind(&[a.clone(), b.clone()]) {
                            grounded.push(v);
                        }
                    }
                }
                grounded
            }
            _ => {
                warn!(
                    variable = variable.name(),
                    arity = types.len(),
                    max = MAX_GROUND_ARITY,
                    "grounding is not implemented above the maximum arity"
                );
                Vec::new()
            }
        }
    }

    /// Objects eligible for a parameter of type `type_name`: the type's own
    /// objects followed by each descendant type's, in declaration order.
    pub fn eligible_objects(&self, type_name: &str) -> Vec<ObjectInstance> {
        let mut objects = Vec::new();
        for eligible_type in self.domain.type_inheritance.subtree_pointing_to(type_name) {
            for object in self.all_objects.objects(&eligible_type) {
                objects.push(ObjectInstance::new(object.clone(), eligible_type.clone()));
            }
        }
        objects
    }

    /// Object tuples for a list of parameter types.
    ///
    /// Implemented for arities 0 and 1; higher arities error with the
    /// documented limitation (the 2-ary `ground` path enumerates its own
    /// cross product).
    pub fn object_permutations(
        &self,
        types: &[&str],
    ) -> Result<Vec<Vec<ObjectInstance>>, GroundingError> {
        match types {
            [] => Ok(vec![Vec::new()]),
            [t0] => Ok(self
                .eligible_objects(t0)
                .into_iter()
                .map(|o| vec![o])
                .collect()),
            _ => Err(GroundingError::UnsupportedArity(types.len())),
        }
    }
}
