#![allow(dead_code)]

use ferrum_models::datatypes::{CodeableConcept, Coding, Period, Reference};
use ferrum_models::primitive::{Code, DateTime, FhirString, Uri};
use ferrum_resources::{
    Encounter, EncounterBuilder, EncounterStatus, SubscriptionTopic, SubscriptionTopicBuilder,
    TestReport, TestReportActionResult, TestReportAssert, TestReportBuilder, TestReportOperation,
    TestReportResult, TestReportStatus, PublicationStatus,
};

pub fn uri(value: &str) -> Uri {
    Uri::new(value).expect("valid uri")
}

pub fn string(value: &str) -> FhirString {
    FhirString::new(value).expect("valid string")
}

pub fn coding(system: &str, code: &str) -> Coding {
    Coding::builder()
        .system(uri(system))
        .code(Code::new(code).expect("valid code"))
        .build()
        .expect("valid coding")
}

pub fn concept(text: &str) -> CodeableConcept {
    CodeableConcept::builder()
        .text(string(text))
        .build()
        .expect("valid concept")
}

pub fn typed_reference(resource_type: &str, literal: &str) -> Reference {
    Reference::builder()
        .reference(string(literal))
        .r#type(uri(resource_type))
        .build()
        .expect("valid reference")
}

pub fn period(start: &str) -> Period {
    Period::builder()
        .start(DateTime::parse(start).expect("valid start"))
        .build()
        .expect("valid period")
}

pub fn ambulatory() -> Coding {
    coding("http://terminology.hl7.org/CodeSystem/v3-ActCode", "AMB")
}

/// Builder holding every required Encounter field
pub fn encounter_builder() -> EncounterBuilder {
    Encounter::builder()
        .status(EncounterStatus::Finished)
        .class(ambulatory())
}

pub fn encounter() -> Encounter {
    encounter_builder()
        .subject(typed_reference("Patient", "Patient/example"))
        .build()
        .expect("valid encounter")
}

/// Builder holding every required SubscriptionTopic field
pub fn topic_builder() -> SubscriptionTopicBuilder {
    SubscriptionTopic::builder()
        .url(uri("http://example.org/fhir/SubscriptionTopic/encounter-start"))
        .status(PublicationStatus::Draft)
}

/// Builder holding every required TestReport field
pub fn report_builder() -> TestReportBuilder {
    TestReport::builder()
        .status(TestReportStatus::Completed)
        .test_script(typed_reference("TestScript", "TestScript/read"))
        .result(TestReportResult::Pass)
}

pub fn operation(result: TestReportActionResult) -> TestReportOperation {
    TestReportOperation::builder()
        .result(result)
        .build()
        .expect("valid operation")
}

pub fn assertion(result: TestReportActionResult) -> TestReportAssert {
    TestReportAssert::builder()
        .result(result)
        .build()
        .expect("valid assert")
}
