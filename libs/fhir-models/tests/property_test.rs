//! Property-based tests using QuickCheck

use ferrum_models::datatypes::{CodeableConcept, Coding};
use ferrum_models::primitive::{Code, FhirString, Integer};
use ferrum_models::visitor::{structural_hash, structurally_equal, EventRecorder};
use ferrum_models::Validate;
use quickcheck::{QuickCheck, TestResult};

mod test_support;

fn concept_from(text: &str, codes: &[String]) -> Option<CodeableConcept> {
    let text = FhirString::new(text).ok()?;
    let codings = codes
        .iter()
        .map(|c| {
            Code::new(c.as_str())
                .and_then(|code| Coding::builder().code(code).build())
                .ok()
        })
        .collect::<Option<Vec<_>>>()?;
    CodeableConcept::builder()
        .coding(codings)
        .text(text)
        .build()
        .ok()
}

/// Property: seeding a builder from a node and rebuilding yields an equal node
#[test]
fn prop_to_builder_round_trip() {
    fn prop(text: String, codes: Vec<String>) -> TestResult {
        let Some(concept) = concept_from(&text, &codes) else {
            return TestResult::discard();
        };
        let copy = match concept.to_builder().build() {
            Ok(copy) => copy,
            Err(_) => return TestResult::failed(),
        };
        TestResult::from_bool(
            copy == concept
                && structurally_equal(&copy, &concept)
                && structural_hash(&copy) == structural_hash(&concept),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, Vec<String>) -> TestResult);
}

/// Property: a built node always passes validation again
#[test]
fn prop_validation_idempotent() {
    fn prop(text: String, codes: Vec<String>) -> TestResult {
        let Some(concept) = concept_from(&text, &codes) else {
            return TestResult::discard();
        };
        TestResult::from_bool(concept.validate().is_ok() && concept.validate().is_ok())
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, Vec<String>) -> TestResult);
}

/// Property: two walks over the same tree report identical event streams
#[test]
fn prop_traversal_deterministic() {
    fn prop(text: String, codes: Vec<String>) -> TestResult {
        let Some(concept) = concept_from(&text, &codes) else {
            return TestResult::discard();
        };
        let first = EventRecorder::record(&concept);
        let second = EventRecorder::record(&concept);
        TestResult::from_bool(first == second && !first.is_empty())
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, Vec<String>) -> TestResult);
}

/// Property: nodes holding different scalars never compare equal
#[test]
fn prop_distinct_values_distinct_nodes() {
    fn prop(a: i32, b: i32) -> TestResult {
        if a == b {
            return TestResult::discard();
        }
        let left = Integer::from(a);
        let right = Integer::from(b);
        TestResult::from_bool(!structurally_equal(&left, &right) && left != right)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(i32, i32) -> TestResult);
}

/// Property: strings made only of whitespace are rejected
#[test]
fn prop_blank_strings_rejected() {
    fn prop(spaces: u8) -> TestResult {
        let blank = " ".repeat(spaces as usize);
        TestResult::from_bool(FhirString::new(blank).is_err())
    }

    QuickCheck::new()
        .tests(50)
        .quickcheck(prop as fn(u8) -> TestResult);
}

#[test]
fn concept_fixture_is_valid() {
    let concept = test_support::concept("Hypertension");
    assert!(concept.validate().is_ok());
}
