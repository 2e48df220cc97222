#![allow(dead_code)]

use ferrum_models::datatypes::{
    CodeableConcept, Coding, Extension, Identifier, Meta, Period, Reference, UsageContext,
};
use ferrum_models::primitive::{Canonical, Code, DateTime, FhirString, Uri};

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
        .coding([coding("http://snomed.info/sct", "38341003")])
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

pub fn period(start: &str, end: &str) -> Period {
    Period::builder()
        .start(DateTime::parse(start).expect("valid start"))
        .end(DateTime::parse(end).expect("valid end"))
        .build()
        .expect("valid period")
}

pub fn extension(url: &str, text: &str) -> Extension {
    Extension::builder()
        .url(uri(url))
        .value(string(text))
        .build()
        .expect("valid extension")
}

pub fn identifier(system: &str, value: &str) -> Identifier {
    Identifier::builder()
        .system(uri(system))
        .value(string(value))
        .build()
        .expect("valid identifier")
}

pub fn meta(profiles: &[&str]) -> Meta {
    Meta::builder()
        .profile(
            profiles
                .iter()
                .map(|p| Canonical::new(*p).expect("valid canonical")),
        )
        .build()
        .expect("valid meta")
}

pub fn venue_context(target: Reference) -> UsageContext {
    UsageContext::builder()
        .code(coding(
            "http://terminology.hl7.org/CodeSystem/usage-context-type",
            "venue",
        ))
        .value(target)
        .build()
        .expect("valid usage context")
}
