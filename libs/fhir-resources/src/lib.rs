//! FHIR records on the ferrum node model
//!
//! Concrete resources built from the framework in `ferrum-models`. Each
//! record is an immutable node with a builder, static field declarations
//! and the record-specific checks (required fields, non-empty required
//! lists, reference target types and operation/assert exclusivity).
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::datatypes::{Coding, Reference};
//! use ferrum_models::primitive::{Code, Uri};
//! use ferrum_models::visitor::to_json;
//! use ferrum_resources::{Encounter, EncounterStatus};
//!
//! let encounter = Encounter::builder()
//!     .status(EncounterStatus::Finished)
//!     .class(
//!         Coding::builder()
//!             .system(Uri::new("http://terminology.hl7.org/CodeSystem/v3-ActCode")?)
//!             .code(Code::new("AMB")?)
//!             .build()?,
//!     )
//!     .subject(Reference::builder().r#type(Uri::new("Patient")?).build()?)
//!     .build()?;
//!
//! assert_eq!(to_json(&encounter)["resourceType"], "Encounter");
//! # Ok::<(), ferrum_models::Error>(())
//! ```

use ferrum_models::TypeRegistry;
use tracing::debug;

pub mod codes;
pub mod encounter;
pub mod subscription_topic;
pub mod test_report;

pub use codes::*;
pub use encounter::{
    Encounter, EncounterBuilder, EncounterClassHistory, EncounterDiagnosis, EncounterHospitalization,
    EncounterLocation, EncounterParticipant, EncounterStatusHistory,
};
pub use subscription_topic::{
    SubscriptionTopic, SubscriptionTopicBuilder, SubscriptionTopicCanFilterBy, SubscriptionTopicEventTrigger,
    SubscriptionTopicNotificationShape, SubscriptionTopicQueryCriteria, SubscriptionTopicResourceTrigger,
};
pub use test_report::{
    TestReport, TestReportAssert, TestReportBuilder, TestReportOperation, TestReportParticipant,
    TestReportSetup, TestReportSetupAction, TestReportTeardown, TestReportTeardownAction, TestReportTest,
    TestReportTestAction,
};

/// Registry of the core framework declarations plus every record and
/// backbone element declared in this crate.
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::core();
    let core = registry.len();
    registry.extend(encounter::type_decls());
    registry.extend(subscription_topic::type_decls());
    registry.extend(test_report::type_decls());
    debug!(core, records = registry.len() - core, "type registry assembled");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrum_models::schema::TypeKind;

    #[test]
    fn test_registry_contains_records() {
        let registry = registry();
        for name in ["Encounter", "SubscriptionTopic", "TestReport"] {
            assert_eq!(registry.get(name).map(|t| t.kind), Some(TypeKind::Resource));
        }
        assert!(registry.contains("Narrative"));
        assert_eq!(registry.types_of_kind(TypeKind::BackboneElement).count(), 20);
    }

    #[test]
    fn test_registry_field_queries() {
        let registry = registry();
        assert!(registry.is_required_field("Encounter", "status"));
        assert!(registry.is_repeating_field("Encounter", "participant"));
        assert_eq!(
            registry.reference_targets("Encounter", "subject"),
            &["Patient", "Group"]
        );
        assert_eq!(
            registry.declaring_type("TestReport", "text").map(|t| t.name),
            Some("DomainResource")
        );
        assert_eq!(
            registry.get("TestReport.Test.Action").map(|t| t.choice_groups.len()),
            Some(1)
        );
    }
}
