//! Property-based tests using QuickCheck

use ferrum_models::visitor::{structural_hash, structurally_equal, EventRecorder};
use ferrum_models::{Error, Validate};
use ferrum_resources::{
    EncounterStatus, TestReportActionResult, TestReportSetupAction, TestReportTest, TestReportTestAction,
};
use quickcheck::{QuickCheck, TestResult};

mod test_support;

use test_support::*;

const STATUSES: [EncounterStatus; 9] = [
    EncounterStatus::Planned,
    EncounterStatus::Arrived,
    EncounterStatus::Triaged,
    EncounterStatus::InProgress,
    EncounterStatus::Onleave,
    EncounterStatus::Finished,
    EncounterStatus::Cancelled,
    EncounterStatus::EnteredInError,
    EncounterStatus::Unknown,
];

const SUBJECT_TYPES: [&str; 6] = ["Patient", "Group", "Practitioner", "Device", "Location", "Encounter"];

/// Property: any encounter rebuilt from its own builder is equal to it
#[test]
fn prop_encounter_round_trip() {
    fn prop(status: u8, reasons: Vec<String>) -> TestResult {
        let status = STATUSES[status as usize % STATUSES.len()];
        let concepts = reasons
            .iter()
            .filter(|r| !r.trim().is_empty())
            .filter_map(|r| {
                ferrum_models::primitive::FhirString::new(r.as_str())
                    .and_then(|text| ferrum_models::datatypes::CodeableConcept::builder().text(text).build())
                    .ok()
            })
            .collect::<Vec<_>>();

        let Ok(encounter) = encounter_builder().status(status).reason_code(concepts).build() else {
            return TestResult::failed();
        };
        let Ok(copy) = encounter.to_builder().build() else {
            return TestResult::failed();
        };
        TestResult::from_bool(
            encounter == copy
                && structurally_equal(&encounter, &copy)
                && structural_hash(&encounter) == structural_hash(&copy)
                && encounter.validate().is_ok(),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8, Vec<String>) -> TestResult);
}

/// Property: subject is accepted exactly when its type tag is Patient or Group
#[test]
fn prop_subject_target_types() {
    fn prop(pick: u8) -> TestResult {
        let target = SUBJECT_TYPES[pick as usize % SUBJECT_TYPES.len()];
        let result = encounter_builder()
            .subject(typed_reference(target, &format!("{target}/1")))
            .build();
        let allowed = matches!(target, "Patient" | "Group");
        TestResult::from_bool(match result {
            Ok(_) => allowed,
            Err(Error::InvalidReferenceTargetType { .. }) => !allowed,
            Err(_) => false,
        })
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8) -> TestResult);
}

/// Property: an action builds iff exactly one of operation/assert is set
#[test]
fn prop_action_exclusivity() {
    fn prop(with_operation: bool, with_assert: bool) -> TestResult {
        let mut builder = TestReportSetupAction::builder();
        if with_operation {
            builder = builder.operation(operation(TestReportActionResult::Pass));
        }
        if with_assert {
            builder = builder.assert(assertion(TestReportActionResult::Fail));
        }
        let built = builder.build();
        TestResult::from_bool(built.is_ok() == (with_operation != with_assert))
    }

    QuickCheck::new()
        .tests(20)
        .quickcheck(prop as fn(bool, bool) -> TestResult);
}

/// Property: traversal of a test with any number of actions is deterministic
/// and reports every action
#[test]
fn prop_traversal_deterministic() {
    fn prop(count: u8) -> TestResult {
        let count = (count % 8) as usize + 1;
        let actions = (0..count)
            .map(|_| {
                TestReportTestAction::builder()
                    .assert(assertion(TestReportActionResult::Pass))
                    .build()
            })
            .collect::<Result<Vec<_>, _>>();
        let Ok(actions) = actions else {
            return TestResult::failed();
        };
        let Ok(test) = TestReportTest::builder().action(actions).build() else {
            return TestResult::failed();
        };

        let first = EventRecorder::record(&test);
        let second = EventRecorder::record(&test);
        TestResult::from_bool(first == second && test.action().len() == count)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u8) -> TestResult);
}
