use ferrum_models::primitive::{FhirDecimal, Markdown};
use ferrum_models::visitor::{collect, structural_hash, to_json};
use ferrum_models::{Error, Validate};
use ferrum_resources::{
    TestReport, TestReportActionResult, TestReportOperation, TestReportParticipant,
    TestReportParticipantType, TestReportResult, TestReportSetup, TestReportSetupAction,
    TestReportStatus, TestReportTeardown, TestReportTeardownAction, TestReportTest,
    TestReportTestAction,
};
use rust_decimal::Decimal;
use serde_json::json;

mod test_support;

use test_support::*;

fn setup() -> TestReportSetup {
    TestReportSetup::builder()
        .action([TestReportSetupAction::builder()
            .operation(operation(TestReportActionResult::Pass))
            .build()
            .unwrap()])
        .build()
        .unwrap()
}

fn read_test() -> TestReportTest {
    TestReportTest::builder()
        .name(string("read patient"))
        .action([
            TestReportTestAction::builder()
                .operation(operation(TestReportActionResult::Pass))
                .build()
                .unwrap(),
            TestReportTestAction::builder()
                .assert(assertion(TestReportActionResult::Pass))
                .build()
                .unwrap(),
        ])
        .build()
        .unwrap()
}

#[test]
fn required_fields_are_checked_in_order() {
    let err = TestReport::builder().build().unwrap_err();
    assert_eq!(err.path(), Some("status"));

    let err = TestReport::builder()
        .status(TestReportStatus::Completed)
        .build()
        .unwrap_err();
    assert_eq!(err.path(), Some("testScript"));

    let err = TestReport::builder()
        .status(TestReportStatus::Completed)
        .test_script(typed_reference("TestScript", "TestScript/read"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "TestReport", ref path } if path == "result"
    ));
}

#[test]
fn test_script_reference_target() {
    let err = TestReport::builder()
        .status(TestReportStatus::Completed)
        .test_script(typed_reference("Patient", "Patient/1"))
        .result(TestReportResult::Fail)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidReferenceTargetType { ref path, .. } if path == "testScript"));
}

#[test]
fn empty_action_lists_are_invalid_cardinality() {
    let err = TestReportSetup::builder().build().unwrap_err();
    assert!(matches!(err, Error::InvalidCardinality { type_name: "TestReport.Setup", .. }));

    let err = TestReportTest::builder()
        .name(string("nothing"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCardinality { type_name: "TestReport.Test", ref path, .. } if path == "action"
    ));

    let err = TestReportTeardown::builder().build().unwrap_err();
    assert_eq!(err.path(), Some("action"));
}

#[test]
fn action_requires_exactly_one_of_operation_or_assert() {
    let both = TestReportTestAction::builder()
        .operation(operation(TestReportActionResult::Pass))
        .assert(assertion(TestReportActionResult::Fail))
        .build()
        .unwrap_err();
    assert!(matches!(
        both,
        Error::ChoiceExclusivityViolation { reason: "both present", .. }
    ));

    let neither = TestReportSetupAction::builder().build().unwrap_err();
    assert!(matches!(
        neither,
        Error::ChoiceExclusivityViolation {
            type_name: "TestReport.Setup.Action",
            reason: "neither present",
            ..
        }
    ));
}

#[test]
fn modifier_extension_alone_does_not_satisfy_choice() {
    let extension = ferrum_models::datatypes::Extension::builder()
        .url(uri("http://example.org/fhir/StructureDefinition/skipped"))
        .value(string("manual"))
        .build()
        .unwrap();
    let err = TestReportSetupAction::builder()
        .modifier_extension([extension])
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::ChoiceExclusivityViolation { .. }));
}

#[test]
fn teardown_action_requires_operation() {
    let err = TestReportTeardownAction::builder().build().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "TestReport.Teardown.Action", ref path } if path == "operation"
    ));
}

#[test]
fn participant_requires_type_and_uri() {
    let err = TestReportParticipant::builder()
        .r#type(TestReportParticipantType::Server)
        .build()
        .unwrap_err();
    assert_eq!(err.path(), Some("uri"));
}

#[test]
fn full_report_validates_and_round_trips() {
    let report = report_builder()
        .name(string("Patient read"))
        .score(Decimal::new(875, 1))
        .participant([TestReportParticipant::builder()
            .r#type(TestReportParticipantType::TestEngine)
            .uri(uri("http://example.org/engine"))
            .build()
            .unwrap()])
        .setup(setup())
        .test([read_test()])
        .teardown(
            TestReportTeardown::builder()
                .action([TestReportTeardownAction::builder()
                    .operation(operation(TestReportActionResult::Skip))
                    .build()
                    .unwrap()])
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert!(report.validate().is_ok());
    assert_eq!(report.score().and_then(|s| s.value()), Some(&Decimal::new(875, 1)));

    let copy = report.to_builder().build().unwrap();
    assert_eq!(report, copy);
    assert_eq!(structural_hash(&report), structural_hash(&copy));

    let operations: Vec<TestReportOperation> = collect(&report);
    assert_eq!(operations.len(), 3);
}

#[test]
fn json_uses_operation_and_assert_names() {
    let report = report_builder()
        .score(FhirDecimal::new(Decimal::new(100, 0)).unwrap())
        .test([read_test()])
        .build()
        .unwrap();

    assert_eq!(
        to_json(&report),
        json!({
            "resourceType": "TestReport",
            "status": "completed",
            "testScript": {"reference": "TestScript/read", "type": "TestScript"},
            "result": "pass",
            "score": 100,
            "test": [{
                "name": "read patient",
                "action": [
                    {"operation": {"result": "pass"}},
                    {"assert": {"result": "pass"}}
                ]
            }]
        })
    );
}

#[test]
fn operation_message_is_markdown() {
    let op = TestReportOperation::builder()
        .result(TestReportActionResult::Error)
        .message(Markdown::new("Server returned **500**").unwrap())
        .build()
        .unwrap();
    assert_eq!(op.message().and_then(|m| m.as_str()), Some("Server returned **500**"));
}
