use ferrum_models::config::{BuildOptions, ModelConfig, Preset};
use ferrum_models::datatypes::{
    Coding, Extension, Identifier, Meta, Narrative, NarrativeStatus, Period, Reference,
    UsageContext,
};
use ferrum_models::primitive::{Canonical, FhirString, Xhtml};
use ferrum_models::schema::TypeRegistry;
use ferrum_models::visitor::{
    collect, structural_hash, structurally_equal, to_json, visit_root, Event, EventRecorder,
    Visitor,
};
use ferrum_models::{Error, Node, Validate};
use serde_json::json;

mod test_support;

use test_support::*;

#[test]
fn empty_composite_is_rejected() {
    let err = Coding::builder().build().unwrap_err();
    assert!(matches!(err, Error::EmptyComposite { type_name: "Coding" }));
}

#[test]
fn element_id_alone_does_not_satisfy_value_or_children() {
    let err = Period::builder().id("p1").build().unwrap_err();
    assert!(matches!(err, Error::EmptyComposite { type_name: "Period" }));

    let period = Period::builder()
        .id("p1")
        .extension([extension("http://example.org/why", "open-ended")])
        .build()
        .unwrap();
    assert_eq!(period.id(), Some("p1"));
}

#[test]
fn unvalidated_build_defers_rules() {
    let empty = Coding::builder().unvalidated().build().unwrap();
    assert!(matches!(empty.validate(), Err(Error::EmptyComposite { .. })));

    let incomplete = Narrative::builder()
        .status(NarrativeStatus::Empty)
        .with_options(BuildOptions::unvalidated())
        .build()
        .unwrap();
    let err = incomplete.validate().unwrap_err();
    assert_eq!(err.path(), Some("div"));
    assert_eq!(err.type_name(), Some("Narrative"));
}

#[test]
fn validation_is_idempotent() {
    let narrative = Narrative::builder()
        .status(NarrativeStatus::Generated)
        .div(Xhtml::new("<div xmlns=\"http://www.w3.org/1999/xhtml\">ok</div>").unwrap())
        .build()
        .unwrap();
    assert!(narrative.validate().is_ok());
    assert!(narrative.validate().is_ok());
}

#[test]
fn reference_targets_follow_allow_list() {
    let ok = venue_context(typed_reference("Location", "Location/1"));
    assert!(ok.value().is_some());

    let err = UsageContext::builder()
        .code(coding("http://example.org", "venue"))
        .value(typed_reference("Patient", "Patient/1"))
        .build()
        .unwrap_err();
    match err {
        Error::InvalidReferenceTargetType {
            type_name,
            path,
            found,
            allowed,
        } => {
            assert_eq!(type_name, "UsageContext");
            assert_eq!(path, "valueReference");
            assert_eq!(found, "Patient");
            assert!(allowed.contains(&"Location"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reference_type_canonical_url_is_accepted() {
    let reference = typed_reference(
        "http://hl7.org/fhir/StructureDefinition/Organization",
        "Organization/acme",
    );
    let identifier = Identifier::builder()
        .value(string("42"))
        .assigner(reference)
        .build();
    assert!(identifier.is_ok());
}

#[test]
fn untagged_and_unknown_references() {
    let untagged = Reference::builder()
        .reference(string("Patient/1"))
        .build()
        .unwrap();
    assert!(Identifier::builder()
        .value(string("42"))
        .assigner(untagged)
        .build()
        .is_ok());

    let unknown = typed_reference("Spaceship", "Spaceship/1");
    let err = Identifier::builder()
        .value(string("42"))
        .assigner(unknown.clone())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidReferenceTargetType { ref found, .. } if found == "Spaceship"));

    let permissive = ModelConfig::preset(Preset::Permissive).compile().unwrap();
    let identifier = Identifier::builder()
        .value(string("42"))
        .assigner(unknown)
        .with_options(permissive)
        .build();
    assert!(identifier.is_ok());
}

#[test]
fn any_resource_target_admits_newer_record_types() {
    for target in ["Citation", "ClinicalUseDefinition", "Ingredient", "SubscriptionStatus"] {
        let extension = Extension::builder()
            .url(uri("http://example.org/fhir/StructureDefinition/source"))
            .value(typed_reference(target, &format!("{target}/1")))
            .build();
        assert!(extension.is_ok(), "{target} should be accepted");
    }

    let err = Extension::builder()
        .url(uri("http://example.org/fhir/StructureDefinition/source"))
        .value(typed_reference("Spaceship", "Spaceship/1"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidReferenceTargetType { ref path, ref found, .. }
            if path == "valueReference" && found == "Spaceship"
    ));
}

#[test]
fn derived_builder_does_not_alias_original() {
    let original = meta(&["http://example.org/StructureDefinition/a"]);
    let derived = original
        .to_builder()
        .profile([Canonical::new("http://example.org/StructureDefinition/b").unwrap()])
        .build()
        .unwrap();

    assert_eq!(original.profile().len(), 1);
    assert_eq!(derived.profile().len(), 2);

    let replaced = original.to_builder().replace_profile(Vec::new()).version_id(
        ferrum_models::primitive::Id::new("2").unwrap(),
    );
    assert_eq!(replaced.build().unwrap().profile().len(), 0);
    assert_eq!(original.profile().len(), 1);
}

#[test]
fn to_builder_round_trip_is_structurally_equal() {
    let original = venue_context(typed_reference("Group", "Group/7"));
    let copy = original.to_builder().build().unwrap();
    assert_eq!(original, copy);
    assert!(structurally_equal(&original, &copy));
    assert_eq!(structural_hash(&original), structural_hash(&copy));
}

#[test]
fn traversal_follows_declaration_order() {
    let period = period("2024-01-01", "2024-01-02");
    let starts: Vec<String> = EventRecorder::record(&period)
        .into_iter()
        .filter_map(|event| match event {
            Event::Start { name, .. } => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(starts, ["Period", "start", "end"]);
}

#[test]
fn repeated_items_carry_positions() {
    let meta = meta(&["http://example.org/a", "http://example.org/b"]);
    let indexes: Vec<Option<usize>> = EventRecorder::record(&meta)
        .into_iter()
        .filter_map(|event| match event {
            Event::Start { name, index, .. } if name == "profile" => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(indexes, [Some(0), Some(1)]);
}

#[test]
fn closed_visit_gate_still_ends_node() {
    #[derive(Default)]
    struct Shallow {
        starts: usize,
        ends: usize,
        post: usize,
    }

    impl Visitor for Shallow {
        fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
            self.starts += 1;
        }

        fn visit(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) -> bool {
            false
        }

        fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Node) {
            self.ends += 1;
        }

        fn post_visit(&mut self, _node: &dyn Node) {
            self.post += 1;
        }
    }

    let mut visitor = Shallow::default();
    visit_root(&concept("Hypertension"), &mut visitor);
    assert_eq!((visitor.starts, visitor.ends, visitor.post), (1, 1, 1));
}

#[test]
fn collect_walks_into_choice_values() {
    let context = venue_context(typed_reference("Location", "Location/1"));
    let strings: Vec<FhirString> = collect(&context);
    assert_eq!(strings.len(), 1);
    assert_eq!(strings[0].as_str(), Some("Location/1"));
}

#[test]
fn json_of_nested_choice() {
    let context = venue_context(typed_reference("Location", "Location/1"));
    assert_eq!(
        to_json(&context),
        json!({
            "code": {
                "system": "http://terminology.hl7.org/CodeSystem/usage-context-type",
                "code": "venue"
            },
            "valueReference": {"reference": "Location/1", "type": "Location"}
        })
    );
}

#[test]
fn core_registry_describes_datatypes() {
    let registry = TypeRegistry::core();
    assert!(registry.contains("Narrative"));
    assert!(registry.is_required_field("Narrative", "div"));
    assert!(registry.is_repeating_field("Meta", "profile"));
    assert!(registry.is_choice_field("UsageContext", "value"));
    assert!(registry.reference_targets("Identifier", "assigner").contains(&"Organization"));

    let names: Vec<&str> = registry.fields("Narrative").iter().map(|f| f.name).collect();
    assert_eq!(names, ["id", "extension", "status", "div"]);
    assert_eq!(
        registry.declaring_type("Meta", "extension").map(|t| t.name),
        Some("Element")
    );
    assert_eq!(Meta::builder().build().unwrap_err().type_name(), Some("Meta"));
}
