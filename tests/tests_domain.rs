//! Domain model tests: extraction, symbol lookup, and reference scanning.

mod helpers;

use helpers::{GENERATOR_DOMAIN, parse_domain};
use pddl::base::Span;
use pddl::model::{SymbolInfo, VariableKind};
use rstest::rstest;

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn extracts_name_and_requirements() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(model.name, "generator");
    assert_eq!(model.requirements, vec![":strips", ":typing", ":fluents"]);
}

#[test]
fn extracts_types_in_declaration_order() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(model.types(), vec!["generator", "tankstelle", "tank"]);
}

#[test]
fn extracts_predicates_with_documentation() {
    let model = parse_domain(GENERATOR_DOMAIN);
    let names: Vec<&str> = model.predicates.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["p0", "refueling", "p3"]);

    let refueling = model.find_variable("refueling").unwrap();
    assert_eq!(refueling.documentation, vec!["generator is refueling"]);
    assert_eq!(refueling.arity(), 1);
}

#[test]
fn extracts_function_with_unit() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(model.functions.len(), 1);
    let fuel = &model.functions[0];
    assert_eq!(fuel.name(), "fuel-level");
    assert_eq!(fuel.unit.as_deref(), Some("liter"));
}

#[test]
fn extracts_action() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(model.actions.len(), 1);
    let action = &model.actions[0];
    assert_eq!(action.name, "refuel");
    assert!(!action.durative);
    assert_eq!(action.parameters.len(), 1);
    assert_eq!(action.parameters[0].name, "g");
    assert_eq!(action.parameters[0].type_name, "generator");
}

// ============================================================================
// Symbol lookup
// ============================================================================

#[rstest]
#[case("p3", VariableKind::Predicate)]
#[case("P3", VariableKind::Predicate)]
#[case("fuel-level", VariableKind::Function)]
#[case("nowhere-declared", VariableKind::Undecided)]
fn variable_kind_classification(#[case] name: &str, #[case] expected: VariableKind) {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(model.variable_kind(name), expected);
}

#[test]
fn find_symbol_discriminates_by_declaration() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert!(matches!(
        model.find_symbol("p3"),
        Some(SymbolInfo::Variable {
            kind: VariableKind::Predicate,
            ..
        })
    ));
    assert!(matches!(
        model.find_symbol("refuel"),
        Some(SymbolInfo::Action { .. })
    ));
    assert!(matches!(
        model.find_symbol("tank"),
        Some(SymbolInfo::Type { name: "tank" })
    ));
    assert!(matches!(
        model.find_symbol("?g"),
        Some(SymbolInfo::Parameter { .. })
    ));
    assert!(model.find_symbol("missing").is_none());
}

// ============================================================================
// References and locations
// ============================================================================

#[test]
fn variable_references_exclude_comments() {
    let model = parse_domain(GENERATOR_DOMAIN);
    let p0 = model.find_variable("p0").unwrap();
    // `(p0)` also appears inside a comment on the declaration line
    assert_eq!(model.variable_references(p0).len(), 1);
}

#[test]
fn variable_references_start_with_the_declaration() {
    let model = parse_domain(GENERATOR_DOMAIN);
    let p3 = model.find_variable("p3").unwrap();
    let spans = model.variable_references(p3);
    // declaration + precondition + two effect usages
    assert_eq!(spans.len(), 4);
    assert_eq!(spans[0], Span::from_coords(10, 5, 10, 7));
    for pair in spans.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn type_references_cover_typed_positions() {
    let model = parse_domain(GENERATOR_DOMAIN);
    // `- generator` in refueling, p3, fuel-level, and :parameters
    assert_eq!(model.type_references("generator").len(), 4);
    assert!(model.type_references("tank").is_empty());
}

#[test]
fn type_location_points_into_the_types_section() {
    let model = parse_domain(GENERATOR_DOMAIN);
    assert_eq!(
        model.type_location("tank"),
        Some(Span::from_coords(5, 4, 5, 8))
    );
    // declared types only; `generator` appearing elsewhere is irrelevant
    assert_eq!(
        model.type_location("generator"),
        Some(Span::from_coords(4, 4, 4, 13))
    );
    assert_eq!(model.type_location("unknown"), None);
}

// ============================================================================
// Resilience
// ============================================================================

#[rstest]
#[case("")]
#[case("; nothing but a comment")]
#[case("(define (domain broken")]
fn degraded_input_yields_empty_model(#[case] input: &str) {
    let model = parse_domain(input);
    assert!(model.predicates.is_empty());
    assert!(model.actions.is_empty());
}
