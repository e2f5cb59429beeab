//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use pddl::model::{DomainModel, ProblemModel};
use pddl::syntax::SyntaxTree;

/// A small refueling domain exercising types, comments, documentation,
/// functions, and an action. Line numbers (0-based) matter to the
/// location-oriented tests: `tank` sits alone on line 5, the `p3`
/// declaration on line 10.
pub const GENERATOR_DOMAIN: &str = "\
;; Generator refueling domain
(define (domain generator)
  (:requirements :strips :typing :fluents)
  (:types
    generator tankstelle ; comment
    tank)
  (:predicates
    (p0) ; (p0) appears in a comment
    ; generator is refueling
    (refueling ?g - generator)
    (p3 ?g - generator))
  (:functions
    ; fuel level [liter]
    (fuel-level ?g - generator))
  (:action refuel
    :parameters (?g - generator)
    :precondition (and (p3 ?g))
    :effect (and (p3 ?g) (increase (fuel-level ?g) 1.0) (p3 ?g))))
";

pub const GENERATOR_PROBLEM: &str = "\
(define (problem refuel-1)
  (:domain generator)
  (:objects o1 o2 - generator))
";

pub fn parse_domain(text: &str) -> DomainModel {
    DomainModel::parse("file:///test/domain.pddl", text)
}

pub fn parse_problem(text: &str) -> ProblemModel {
    ProblemModel::parse("file:///test/problem.pddl", text)
}

pub fn parse_tree(text: &str) -> SyntaxTree {
    SyntaxTree::new(text)
}
