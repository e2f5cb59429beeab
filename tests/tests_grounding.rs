//! Grounding tests over a (domain, problem) pair.

mod helpers;

use helpers::{GENERATOR_DOMAIN, GENERATOR_PROBLEM, parse_domain, parse_problem};
use pddl::ground::{Grounder, GroundingError};
use pddl::model::Variable;
use rstest::rstest;

#[test]
fn problem_targets_the_domain() {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    assert!(problem.is_for_domain(&domain));
}

#[test]
fn ground_zero_parameters_is_identity() {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    let grounder = Grounder::new(&domain, &problem);

    let p0 = domain.find_variable("p0").unwrap();
    assert_eq!(grounder.ground(p0), vec![p0.clone()]);
}

#[test]
fn ground_one_parameter_follows_object_declaration_order() {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    let grounder = Grounder::new(&domain, &problem);

    let p3 = domain.find_variable("p3").unwrap();
    let names: Vec<String> = grounder.ground(p3).iter().map(Variable::full_name).collect();
    assert_eq!(names, vec!["p3 o1", "p3 o2"]);
}

#[rstest]
#[case("tank")]
#[case("tankstelle")]
fn ground_over_empty_type_yields_nothing(#[case] type_name: &str) {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    let grounder = Grounder::new(&domain, &problem);

    let variable = Variable::from_text(&format!("holds ?t - {type_name}"));
    assert!(grounder.ground(&variable).is_empty());
    assert!(grounder.eligible_objects(type_name).is_empty());
}

#[test]
fn grounded_variables_keep_documentation() {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    let grounder = Grounder::new(&domain, &problem);

    let refueling = domain.find_variable("refueling").unwrap();
    let grounded = grounder.ground(refueling);
    assert_eq!(grounded.len(), 2);
    assert!(grounded.iter().all(Variable::is_grounded));
    assert!(
        grounded
            .iter()
            .all(|v| v.documentation == refueling.documentation)
    );
}

#[test]
fn object_permutations_supports_at_most_one_type() {
    let domain = parse_domain(GENERATOR_DOMAIN);
    let problem = parse_problem(GENERATOR_PROBLEM);
    let grounder = Grounder::new(&domain, &problem);

    assert_eq!(grounder.object_permutations(&[]).unwrap(), vec![vec![]]);

    let singles = grounder.object_permutations(&["generator"]).unwrap();
    let names: Vec<&str> = singles.iter().map(|p| p[0].name.as_str()).collect();
    assert_eq!(names, vec!["o1", "o2"]);

    assert_eq!(
        grounder.object_permutations(&["generator", "generator"]),
        Err(GroundingError::UnsupportedArity(2))
    );
}
