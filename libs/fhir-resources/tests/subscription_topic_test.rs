use ferrum_models::datatypes::{ContactDetail, UsageContext};
use ferrum_models::primitive::{Boolean, Canonical, Coded, Date, Markdown};
use ferrum_models::visitor::{find_first, to_json, Event, EventRecorder};
use ferrum_models::Error;
use ferrum_resources::{
    MethodCode, PublicationStatus, SubscriptionTopic, SubscriptionTopicEventTrigger,
    SubscriptionTopicNotificationShape, SubscriptionTopicQueryCriteria, SubscriptionTopicResourceTrigger,
};
use serde_json::json;

mod test_support;

use test_support::*;

fn encounter_trigger() -> SubscriptionTopicResourceTrigger {
    SubscriptionTopicResourceTrigger::builder()
        .description(Markdown::new("Encounter moved to in-progress").unwrap())
        .resource(uri("http://hl7.org/fhir/StructureDefinition/Encounter"))
        .supported_interaction([Coded::from(MethodCode::Create), Coded::from(MethodCode::Update)])
        .query_criteria(
            SubscriptionTopicQueryCriteria::builder()
                .current(string("status=in-progress"))
                .require_both(Boolean::from(false))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[test]
fn url_and_status_are_required() {
    let err = SubscriptionTopic::builder()
        .status(PublicationStatus::Active)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "SubscriptionTopic", ref path } if path == "url"
    ));

    let err = SubscriptionTopic::builder()
        .url(uri("http://example.org/topic"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), Some("status"));
}

#[test]
fn minimal_topic_builds() {
    let topic = topic_builder().build().unwrap();
    assert_eq!(topic.status().and_then(|s| s.value()), Some(&PublicationStatus::Draft));
    assert!(topic.resource_trigger().is_empty());
}

#[test]
fn event_trigger_requires_event_and_resource() {
    let err = SubscriptionTopicEventTrigger::builder()
        .event(concept("admit"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { type_name: "SubscriptionTopic.EventTrigger", ref path } if path == "resource"
    ));
}

#[test]
fn notification_shape_requires_resource() {
    let err = SubscriptionTopicNotificationShape::builder()
        .include([string("Encounter:patient")])
        .build()
        .unwrap_err();
    assert_eq!(err.path(), Some("resource"));
}

#[test]
fn metadata_fields_round_trip() {
    let contact = ContactDetail::builder()
        .name(string("Topic authors"))
        .build()
        .unwrap();
    let topic = topic_builder()
        .title(string("Encounter start"))
        .derived_from([Canonical::new("http://example.org/fhir/SubscriptionTopic/base").unwrap()])
        .contact([contact])
        .use_context([venue()])
        .approval_date(Date::parse("2024-02").unwrap())
        .resource_trigger([encounter_trigger()])
        .build()
        .unwrap();

    let copy = topic.to_builder().build().unwrap();
    assert_eq!(topic, copy);
    assert_eq!(copy.derived_from().len(), 1);
    assert_eq!(copy.resource_trigger()[0].supported_interaction().len(), 2);
}

#[test]
fn nested_query_criteria_traversal_path() {
    let topic = topic_builder()
        .resource_trigger([encounter_trigger()])
        .build()
        .unwrap();

    let starts: Vec<String> = EventRecorder::record(&topic)
        .into_iter()
        .filter_map(|event| match event {
            Event::Start { name, .. } => Some(name),
            _ => None,
        })
        .collect();
    let trigger = starts.iter().position(|n| n == "resourceTrigger").unwrap();
    let criteria = starts.iter().position(|n| n == "queryCriteria").unwrap();
    let current = starts.iter().position(|n| n == "current").unwrap();
    assert!(trigger < criteria && criteria < current);

    let found = find_first(&topic, |c: &SubscriptionTopicQueryCriteria| c.current().is_some());
    assert!(found.is_some());
}

#[test]
fn json_lists_and_codes() {
    let topic = topic_builder()
        .id("encounter-start")
        .resource_trigger([encounter_trigger()])
        .build()
        .unwrap();

    assert_eq!(
        to_json(&topic),
        json!({
            "resourceType": "SubscriptionTopic",
            "id": "encounter-start",
            "url": "http://example.org/fhir/SubscriptionTopic/encounter-start",
            "status": "draft",
            "resourceTrigger": [{
                "description": "Encounter moved to in-progress",
                "resource": "http://hl7.org/fhir/StructureDefinition/Encounter",
                "supportedInteraction": ["create", "update"],
                "queryCriteria": {
                    "current": "status=in-progress",
                    "requireBoth": false
                }
            }]
        })
    );
}

fn venue() -> UsageContext {
    UsageContext::builder()
        .code(coding(
            "http://terminology.hl7.org/CodeSystem/usage-context-type",
            "venue",
        ))
        .value(concept("Emergency department"))
        .build()
        .unwrap()
}
