//! SubscriptionTopic
//!
//! Describes a stream of resource state changes identified by trigger
//! criteria and annotated with labels useful to filter projections from
//! this topic.

use ferrum_models::builder::{BackboneBuilder, DomainResourceBuilder};
use ferrum_models::config::BuildOptions;
use ferrum_models::datatypes::{CodeableConcept, ContactDetail, Identifier, Period, UsageContext};
use ferrum_models::node::{BackboneBase, DomainResourceBase};
use ferrum_models::primitive::{Boolean, Canonical, Coded, Date, DateTime, FhirString, Markdown, Uri};
use ferrum_models::rules::{finish, Checker, Validate};
use ferrum_models::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use ferrum_models::visitor::{accept_list, accept_one, walk, Visitable, Visitor};
use ferrum_models::Result;

use crate::codes::{
    CriteriaNotExistsBehavior, MethodCode, PublicationStatus, SubscriptionTopicFilterBySearchModifier,
};

const RESOURCE_TYPE_BINDING: BindingDecl = BindingDecl::new(
    "FHIRDefinedTypeExt",
    BindingStrength::Extensible,
    "http://hl7.org/fhir/ValueSet/defined-types",
);

const CRITERIA_BEHAVIOR_BINDING: BindingDecl = BindingDecl::new(
    "CriteriaNotExistsBehavior",
    BindingStrength::Required,
    "http://hl7.org/fhir/ValueSet/subscriptiontopic-cr-behavior|4.0.1",
);

static SUBSCRIPTION_TOPIC_FIELDS: [FieldDecl; 22] = [
    SubscriptionTopic::URL,
    SubscriptionTopic::IDENTIFIER,
    SubscriptionTopic::VERSION,
    SubscriptionTopic::TITLE,
    SubscriptionTopic::DERIVED_FROM,
    SubscriptionTopic::STATUS,
    SubscriptionTopic::EXPERIMENTAL,
    SubscriptionTopic::DATE,
    SubscriptionTopic::PUBLISHER,
    SubscriptionTopic::CONTACT,
    SubscriptionTopic::DESCRIPTION,
    SubscriptionTopic::USE_CONTEXT,
    SubscriptionTopic::JURISDICTION,
    SubscriptionTopic::PURPOSE,
    SubscriptionTopic::COPYRIGHT,
    SubscriptionTopic::APPROVAL_DATE,
    SubscriptionTopic::LAST_REVIEW_DATE,
    SubscriptionTopic::EFFECTIVE_PERIOD,
    SubscriptionTopic::RESOURCE_TRIGGER,
    SubscriptionTopic::EVENT_TRIGGER,
    SubscriptionTopic::CAN_FILTER_BY,
    SubscriptionTopic::NOTIFICATION_SHAPE,
];

pub static SUBSCRIPTION_TOPIC: TypeDecl = TypeDecl::new(
    "SubscriptionTopic",
    TypeKind::Resource,
    Some("DomainResource"),
    &SUBSCRIPTION_TOPIC_FIELDS,
);

/// The definition of a specific topic for triggering events within the
/// Subscriptions framework
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopic {
    base: DomainResourceBase,
    url: Option<Uri>,
    identifier: Vec<Identifier>,
    version: Option<FhirString>,
    title: Option<FhirString>,
    derived_from: Vec<Canonical>,
    status: Option<Coded<PublicationStatus>>,
    experimental: Option<Boolean>,
    date: Option<DateTime>,
    publisher: Option<FhirString>,
    contact: Vec<ContactDetail>,
    description: Option<Markdown>,
    use_context: Vec<UsageContext>,
    jurisdiction: Vec<CodeableConcept>,
    purpose: Option<Markdown>,
    copyright: Option<Markdown>,
    approval_date: Option<Date>,
    last_review_date: Option<Date>,
    effective_period: Option<Period>,
    resource_trigger: Vec<SubscriptionTopicResourceTrigger>,
    event_trigger: Vec<SubscriptionTopicEventTrigger>,
    can_filter_by: Vec<SubscriptionTopicCanFilterBy>,
    notification_shape: Vec<SubscriptionTopicNotificationShape>,
}

impl SubscriptionTopic {
    pub const URL: FieldDecl = FieldDecl::primitive("url", "uri", Cardinality::REQUIRED).summary();
    pub const IDENTIFIER: FieldDecl =
        FieldDecl::complex("identifier", "Identifier", Cardinality::REPEATED).summary();
    pub const VERSION: FieldDecl = FieldDecl::primitive("version", "string", Cardinality::OPTIONAL).summary();
    pub const TITLE: FieldDecl = FieldDecl::primitive("title", "string", Cardinality::OPTIONAL).summary();
    pub const DERIVED_FROM: FieldDecl =
        FieldDecl::primitive("derivedFrom", "canonical", Cardinality::REPEATED).summary();
    pub const STATUS: FieldDecl = FieldDecl::primitive("status", "code", Cardinality::REQUIRED)
        .modifier()
        .summary()
        .bound(BindingDecl::new(
            "PublicationStatus",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/publication-status|4.0.1",
        ));
    pub const EXPERIMENTAL: FieldDecl =
        FieldDecl::primitive("experimental", "boolean", Cardinality::OPTIONAL)
            .modifier()
            .summary();
    pub const DATE: FieldDecl = FieldDecl::primitive("date", "dateTime", Cardinality::OPTIONAL).summary();
    pub const PUBLISHER: FieldDecl = FieldDecl::primitive("publisher", "string", Cardinality::OPTIONAL).summary();
    pub const CONTACT: FieldDecl =
        FieldDecl::complex("contact", "ContactDetail", Cardinality::REPEATED).summary();
    pub const DESCRIPTION: FieldDecl = FieldDecl::primitive("description", "markdown", Cardinality::OPTIONAL);
    pub const USE_CONTEXT: FieldDecl =
        FieldDecl::complex("useContext", "UsageContext", Cardinality::REPEATED).summary();
    pub const JURISDICTION: FieldDecl =
        FieldDecl::complex("jurisdiction", "CodeableConcept", Cardinality::REPEATED)
            .summary()
            .bound(BindingDecl::new(
                "Jurisdiction",
                BindingStrength::Extensible,
                "http://hl7.org/fhir/ValueSet/jurisdiction",
            ));
    pub const PURPOSE: FieldDecl = FieldDecl::primitive("purpose", "markdown", Cardinality::OPTIONAL);
    pub const COPYRIGHT: FieldDecl = FieldDecl::primitive("copyright", "markdown", Cardinality::OPTIONAL);
    pub const APPROVAL_DATE: FieldDecl = FieldDecl::primitive("approvalDate", "date", Cardinality::OPTIONAL);
    pub const LAST_REVIEW_DATE: FieldDecl =
        FieldDecl::primitive("lastReviewDate", "date", Cardinality::OPTIONAL);
    pub const EFFECTIVE_PERIOD: FieldDecl =
        FieldDecl::complex("effectivePeriod", "Period", Cardinality::OPTIONAL).summary();
    pub const RESOURCE_TRIGGER: FieldDecl = FieldDecl::backbone(
        "resourceTrigger",
        "SubscriptionTopic.ResourceTrigger",
        Cardinality::REPEATED,
    )
    .summary();
    pub const EVENT_TRIGGER: FieldDecl =
        FieldDecl::backbone("eventTrigger", "SubscriptionTopic.EventTrigger", Cardinality::REPEATED)
            .summary();
    pub const CAN_FILTER_BY: FieldDecl =
        FieldDecl::backbone("canFilterBy", "SubscriptionTopic.CanFilterBy", Cardinality::REPEATED)
            .summary();
    pub const NOTIFICATION_SHAPE: FieldDecl = FieldDecl::backbone(
        "notificationShape",
        "SubscriptionTopic.NotificationShape",
        Cardinality::REPEATED,
    )
    .summary();

    pub fn builder() -> SubscriptionTopicBuilder {
        SubscriptionTopicBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicBuilder {
        SubscriptionTopicBuilder {
            base: DomainResourceBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            url: self.url.clone(),
            identifier: self.identifier.to_vec(),
            version: self.version.clone(),
            title: self.title.clone(),
            derived_from: self.derived_from.to_vec(),
            status: self.status.clone(),
            experimental: self.experimental.clone(),
            date: self.date.clone(),
            publisher: self.publisher.clone(),
            contact: self.contact.to_vec(),
            description: self.description.clone(),
            use_context: self.use_context.to_vec(),
            jurisdiction: self.jurisdiction.to_vec(),
            purpose: self.purpose.clone(),
            copyright: self.copyright.clone(),
            approval_date: self.approval_date.clone(),
            last_review_date: self.last_review_date.clone(),
            effective_period: self.effective_period.clone(),
            resource_trigger: self.resource_trigger.to_vec(),
            event_trigger: self.event_trigger.to_vec(),
            can_filter_by: self.can_filter_by.to_vec(),
            notification_shape: self.notification_shape.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        one url: Uri;
        list identifier: Identifier;
        one version: FhirString;
        one title: FhirString;
        list derived_from: Canonical;
        one status: Coded<PublicationStatus>;
        one experimental: Boolean;
        one date: DateTime;
        one publisher: FhirString;
        list contact: ContactDetail;
        one description: Markdown;
        list use_context: UsageContext;
        list jurisdiction: CodeableConcept;
        one purpose: Markdown;
        one copyright: Markdown;
        one approval_date: Date;
        one last_review_date: Date;
        one effective_period: Period;
        list resource_trigger: SubscriptionTopicResourceTrigger;
        list event_trigger: SubscriptionTopicEventTrigger;
        list can_filter_by: SubscriptionTopicCanFilterBy;
        list notification_shape: SubscriptionTopicNotificationShape;
    }
}

ferrum_models::impl_domain_resource!(SubscriptionTopic, SUBSCRIPTION_TOPIC);

impl Visitable for SubscriptionTopic {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::URL.name, self.url.as_ref());
            accept_list(v, Self::IDENTIFIER.name, &self.identifier);
            accept_one(v, Self::VERSION.name, self.version.as_ref());
            accept_one(v, Self::TITLE.name, self.title.as_ref());
            accept_list(v, Self::DERIVED_FROM.name, &self.derived_from);
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_one(v, Self::EXPERIMENTAL.name, self.experimental.as_ref());
            accept_one(v, Self::DATE.name, self.date.as_ref());
            accept_one(v, Self::PUBLISHER.name, self.publisher.as_ref());
            accept_list(v, Self::CONTACT.name, &self.contact);
            accept_one(v, Self::DESCRIPTION.name, self.description.as_ref());
            accept_list(v, Self::USE_CONTEXT.name, &self.use_context);
            accept_list(v, Self::JURISDICTION.name, &self.jurisdiction);
            accept_one(v, Self::PURPOSE.name, self.purpose.as_ref());
            accept_one(v, Self::COPYRIGHT.name, self.copyright.as_ref());
            accept_one(v, Self::APPROVAL_DATE.name, self.approval_date.as_ref());
            accept_one(v, Self::LAST_REVIEW_DATE.name, self.last_review_date.as_ref());
            accept_one(v, Self::EFFECTIVE_PERIOD.name, self.effective_period.as_ref());
            accept_list(v, Self::RESOURCE_TRIGGER.name, &self.resource_trigger);
            accept_list(v, Self::EVENT_TRIGGER.name, &self.event_trigger);
            accept_list(v, Self::CAN_FILTER_BY.name, &self.can_filter_by);
            accept_list(v, Self::NOTIFICATION_SHAPE.name, &self.notification_shape);
        });
    }
}

impl Validate for SubscriptionTopic {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::URL, self.url.as_ref())?;
        c.require(&Self::STATUS, self.status.as_ref())?;
        self.base.check(c)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicBuilder {
    base: DomainResourceBuilder,
    options: BuildOptions,
    url: Option<Uri>,
    identifier: Vec<Identifier>,
    version: Option<FhirString>,
    title: Option<FhirString>,
    derived_from: Vec<Canonical>,
    status: Option<Coded<PublicationStatus>>,
    experimental: Option<Boolean>,
    date: Option<DateTime>,
    publisher: Option<FhirString>,
    contact: Vec<ContactDetail>,
    description: Option<Markdown>,
    use_context: Vec<UsageContext>,
    jurisdiction: Vec<CodeableConcept>,
    purpose: Option<Markdown>,
    copyright: Option<Markdown>,
    approval_date: Option<Date>,
    last_review_date: Option<Date>,
    effective_period: Option<Period>,
    resource_trigger: Vec<SubscriptionTopicResourceTrigger>,
    event_trigger: Vec<SubscriptionTopicEventTrigger>,
    can_filter_by: Vec<SubscriptionTopicCanFilterBy>,
    notification_shape: Vec<SubscriptionTopicNotificationShape>,
}

impl SubscriptionTopicBuilder {
    ferrum_models::domain_resource_builder_methods!();

    ferrum_models::builder_setters! {
        one url: Uri;
        list identifier / replace_identifier: Identifier;
        one version: FhirString;
        one title: FhirString;
        list derived_from / replace_derived_from: Canonical;
        one status: Coded<PublicationStatus>;
        one experimental: Boolean;
        one date: DateTime;
        one publisher: FhirString;
        list contact / replace_contact: ContactDetail;
        one description: Markdown;
        list use_context / replace_use_context: UsageContext;
        list jurisdiction / replace_jurisdiction: CodeableConcept;
        one purpose: Markdown;
        one copyright: Markdown;
        one approval_date: Date;
        one last_review_date: Date;
        one effective_period: Period;
        list resource_trigger / replace_resource_trigger: SubscriptionTopicResourceTrigger;
        list event_trigger / replace_event_trigger: SubscriptionTopicEventTrigger;
        list can_filter_by / replace_can_filter_by: SubscriptionTopicCanFilterBy;
        list notification_shape / replace_notification_shape: SubscriptionTopicNotificationShape;
    }

    pub fn build(self) -> Result<SubscriptionTopic> {
        let node = SubscriptionTopic {
            base: self.base.freeze(),
            url: self.url,
            identifier: self.identifier,
            version: self.version,
            title: self.title,
            derived_from: self.derived_from,
            status: self.status,
            experimental: self.experimental,
            date: self.date,
            publisher: self.publisher,
            contact: self.contact,
            description: self.description,
            use_context: self.use_context,
            jurisdiction: self.jurisdiction,
            purpose: self.purpose,
            copyright: self.copyright,
            approval_date: self.approval_date,
            last_review_date: self.last_review_date,
            effective_period: self.effective_period,
            resource_trigger: self.resource_trigger,
            event_trigger: self.event_trigger,
            can_filter_by: self.can_filter_by,
            notification_shape: self.notification_shape,
        };
        finish(node, self.options)
    }
}

static RESOURCE_TRIGGER_FIELDS: [FieldDecl; 5] = [
    SubscriptionTopicResourceTrigger::DESCRIPTION,
    SubscriptionTopicResourceTrigger::RESOURCE,
    SubscriptionTopicResourceTrigger::SUPPORTED_INTERACTION,
    SubscriptionTopicResourceTrigger::QUERY_CRITERIA,
    SubscriptionTopicResourceTrigger::FHIR_PATH_CRITERIA,
];

pub static SUBSCRIPTION_TOPIC_RESOURCE_TRIGGER: TypeDecl = TypeDecl::new(
    "SubscriptionTopic.ResourceTrigger",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &RESOURCE_TRIGGER_FIELDS,
);

/// Definition of a resource-based trigger for the subscription topic
///
/// Backbone element for SubscriptionTopic.resourceTrigger
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopicResourceTrigger {
    base: BackboneBase,
    description: Option<Markdown>,
    resource: Option<Uri>,
    supported_interaction: Vec<Coded<MethodCode>>,
    query_criteria: Option<SubscriptionTopicQueryCriteria>,
    fhir_path_criteria: Option<FhirString>,
}

impl SubscriptionTopicResourceTrigger {
    pub const DESCRIPTION: FieldDecl =
        FieldDecl::primitive("description", "markdown", Cardinality::OPTIONAL).summary();
    pub const RESOURCE: FieldDecl = FieldDecl::primitive("resource", "uri", Cardinality::REQUIRED)
        .summary()
        .bound(RESOURCE_TYPE_BINDING);
    pub const SUPPORTED_INTERACTION: FieldDecl =
        FieldDecl::primitive("supportedInteraction", "code", Cardinality::REPEATED)
            .summary()
            .bound(BindingDecl::new(
                "InteractionTrigger",
                BindingStrength::Required,
                "http://hl7.org/fhir/ValueSet/interaction-trigger|4.0.1",
            ));
    pub const QUERY_CRITERIA: FieldDecl = FieldDecl::backbone(
        "queryCriteria",
        "SubscriptionTopic.ResourceTrigger.QueryCriteria",
        Cardinality::OPTIONAL,
    )
    .summary();
    pub const FHIR_PATH_CRITERIA: FieldDecl =
        FieldDecl::primitive("fhirPathCriteria", "string", Cardinality::OPTIONAL).summary();

    pub fn builder() -> SubscriptionTopicResourceTriggerBuilder {
        SubscriptionTopicResourceTriggerBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicResourceTriggerBuilder {
        SubscriptionTopicResourceTriggerBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            description: self.description.clone(),
            resource: self.resource.clone(),
            supported_interaction: self.supported_interaction.to_vec(),
            query_criteria: self.query_criteria.clone(),
            fhir_path_criteria: self.fhir_path_criteria.clone(),
        }
    }

    ferrum_models::node_getters! {
        one description: Markdown;
        one resource: Uri;
        list supported_interaction: Coded<MethodCode>;
        one query_criteria: SubscriptionTopicQueryCriteria;
        one fhir_path_criteria: FhirString;
    }
}

ferrum_models::impl_backbone!(SubscriptionTopicResourceTrigger, SUBSCRIPTION_TOPIC_RESOURCE_TRIGGER);

impl Visitable for SubscriptionTopicResourceTrigger {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::DESCRIPTION.name, self.description.as_ref());
            accept_one(v, Self::RESOURCE.name, self.resource.as_ref());
            accept_list(v, Self::SUPPORTED_INTERACTION.name, &self.supported_interaction);
            accept_one(v, Self::QUERY_CRITERIA.name, self.query_criteria.as_ref());
            accept_one(v, Self::FHIR_PATH_CRITERIA.name, self.fhir_path_criteria.as_ref());
        });
    }
}

impl Validate for SubscriptionTopicResourceTrigger {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::RESOURCE, self.resource.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicResourceTriggerBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    description: Option<Markdown>,
    resource: Option<Uri>,
    supported_interaction: Vec<Coded<MethodCode>>,
    query_criteria: Option<SubscriptionTopicQueryCriteria>,
    fhir_path_criteria: Option<FhirString>,
}

impl SubscriptionTopicResourceTriggerBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one description: Markdown;
        one resource: Uri;
        list supported_interaction / replace_supported_interaction: Coded<MethodCode>;
        one query_criteria: SubscriptionTopicQueryCriteria;
        one fhir_path_criteria: FhirString;
    }

    pub fn build(self) -> Result<SubscriptionTopicResourceTrigger> {
        let node = SubscriptionTopicResourceTrigger {
            base: self.base.freeze(),
            description: self.description,
            resource: self.resource,
            supported_interaction: self.supported_interaction,
            query_criteria: self.query_criteria,
            fhir_path_criteria: self.fhir_path_criteria,
        };
        finish(node, self.options)
    }
}

static QUERY_CRITERIA_FIELDS: [FieldDecl; 5] = [
    SubscriptionTopicQueryCriteria::PREVIOUS,
    SubscriptionTopicQueryCriteria::RESULT_FOR_CREATE,
    SubscriptionTopicQueryCriteria::CURRENT,
    SubscriptionTopicQueryCriteria::RESULT_FOR_DELETE,
    SubscriptionTopicQueryCriteria::REQUIRE_BOTH,
];

pub static SUBSCRIPTION_TOPIC_QUERY_CRITERIA: TypeDecl = TypeDecl::new(
    "SubscriptionTopic.ResourceTrigger.QueryCriteria",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &QUERY_CRITERIA_FIELDS,
);

/// Query based trigger rule
///
/// Backbone element for SubscriptionTopic.resourceTrigger.queryCriteria
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopicQueryCriteria {
    base: BackboneBase,
    previous: Option<FhirString>,
    result_for_create: Option<Coded<CriteriaNotExistsBehavior>>,
    current: Option<FhirString>,
    result_for_delete: Option<Coded<CriteriaNotExistsBehavior>>,
    require_both: Option<Boolean>,
}

impl SubscriptionTopicQueryCriteria {
    pub const PREVIOUS: FieldDecl = FieldDecl::primitive("previous", "string", Cardinality::OPTIONAL).summary();
    pub const RESULT_FOR_CREATE: FieldDecl =
        FieldDecl::primitive("resultForCreate", "code", Cardinality::OPTIONAL)
            .summary()
            .bound(CRITERIA_BEHAVIOR_BINDING);
    pub const CURRENT: FieldDecl = FieldDecl::primitive("current", "string", Cardinality::OPTIONAL).summary();
    pub const RESULT_FOR_DELETE: FieldDecl =
        FieldDecl::primitive("resultForDelete", "code", Cardinality::OPTIONAL)
            .summary()
            .bound(CRITERIA_BEHAVIOR_BINDING);
    pub const REQUIRE_BOTH: FieldDecl =
        FieldDecl::primitive("requireBoth", "boolean", Cardinality::OPTIONAL).summary();

    pub fn builder() -> SubscriptionTopicQueryCriteriaBuilder {
        SubscriptionTopicQueryCriteriaBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicQueryCriteriaBuilder {
        SubscriptionTopicQueryCriteriaBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            previous: self.previous.clone(),
            result_for_create: self.result_for_create.clone(),
            current: self.current.clone(),
            result_for_delete: self.result_for_delete.clone(),
            require_both: self.require_both.clone(),
        }
    }

    ferrum_models::node_getters! {
        one previous: FhirString;
        one result_for_create: Coded<CriteriaNotExistsBehavior>;
        one current: FhirString;
        one result_for_delete: Coded<CriteriaNotExistsBehavior>;
        one require_both: Boolean;
    }
}

ferrum_models::impl_backbone!(SubscriptionTopicQueryCriteria, SUBSCRIPTION_TOPIC_QUERY_CRITERIA);

impl Visitable for SubscriptionTopicQueryCriteria {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::PREVIOUS.name, self.previous.as_ref());
            accept_one(v, Self::RESULT_FOR_CREATE.name, self.result_for_create.as_ref());
            accept_one(v, Self::CURRENT.name, self.current.as_ref());
            accept_one(v, Self::RESULT_FOR_DELETE.name, self.result_for_delete.as_ref());
            accept_one(v, Self::REQUIRE_BOTH.name, self.require_both.as_ref());
        });
    }
}

impl Validate for SubscriptionTopicQueryCriteria {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicQueryCriteriaBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    previous: Option<FhirString>,
    result_for_create: Option<Coded<CriteriaNotExistsBehavior>>,
    current: Option<FhirString>,
    result_for_delete: Option<Coded<CriteriaNotExistsBehavior>>,
    require_both: Option<Boolean>,
}

impl SubscriptionTopicQueryCriteriaBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one previous: FhirString;
        one result_for_create: Coded<CriteriaNotExistsBehavior>;
        one current: FhirString;
        one result_for_delete: Coded<CriteriaNotExistsBehavior>;
        one require_both: Boolean;
    }

    pub fn build(self) -> Result<SubscriptionTopicQueryCriteria> {
        let node = SubscriptionTopicQueryCriteria {
            base: self.base.freeze(),
            previous: self.previous,
            result_for_create: self.result_for_create,
            current: self.current,
            result_for_delete: self.result_for_delete,
            require_both: self.require_both,
        };
        finish(node, self.options)
    }
}

static EVENT_TRIGGER_FIELDS: [FieldDecl; 3] = [
    SubscriptionTopicEventTrigger::DESCRIPTION,
    SubscriptionTopicEventTrigger::EVENT,
    SubscriptionTopicEventTrigger::RESOURCE,
];

pub static SUBSCRIPTION_TOPIC_EVENT_TRIGGER: TypeDecl = TypeDecl::new(
    "SubscriptionTopic.EventTrigger",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &EVENT_TRIGGER_FIELDS,
);

/// Event definitions the SubscriptionTopic
///
/// Backbone element for SubscriptionTopic.eventTrigger
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopicEventTrigger {
    base: BackboneBase,
    description: Option<Markdown>,
    event: Option<CodeableConcept>,
    resource: Option<Uri>,
}

impl SubscriptionTopicEventTrigger {
    pub const DESCRIPTION: FieldDecl =
        FieldDecl::primitive("description", "markdown", Cardinality::OPTIONAL).summary();
    pub const EVENT: FieldDecl = FieldDecl::complex("event", "CodeableConcept", Cardinality::REQUIRED)
        .summary()
        .bound(BindingDecl::new(
            "SubscriptionTopicEventTrigger",
            BindingStrength::Example,
            "http://terminology.hl7.org/ValueSet/v2-0003",
        ));
    pub const RESOURCE: FieldDecl = FieldDecl::primitive("resource", "uri", Cardinality::REQUIRED)
        .summary()
        .bound(RESOURCE_TYPE_BINDING);

    pub fn builder() -> SubscriptionTopicEventTriggerBuilder {
        SubscriptionTopicEventTriggerBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicEventTriggerBuilder {
        SubscriptionTopicEventTriggerBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            description: self.description.clone(),
            event: self.event.clone(),
            resource: self.resource.clone(),
        }
    }

    ferrum_models::node_getters! {
        one description: Markdown;
        one event: CodeableConcept;
        one resource: Uri;
    }
}

ferrum_models::impl_backbone!(SubscriptionTopicEventTrigger, SUBSCRIPTION_TOPIC_EVENT_TRIGGER);

impl Visitable for SubscriptionTopicEventTrigger {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::DESCRIPTION.name, self.description.as_ref());
            accept_one(v, Self::EVENT.name, self.event.as_ref());
            accept_one(v, Self::RESOURCE.name, self.resource.as_ref());
        });
    }
}

impl Validate for SubscriptionTopicEventTrigger {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::EVENT, self.event.as_ref())?;
        c.require(&Self::RESOURCE, self.resource.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicEventTriggerBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    description: Option<Markdown>,
    event: Option<CodeableConcept>,
    resource: Option<Uri>,
}

impl SubscriptionTopicEventTriggerBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one description: Markdown;
        one event: CodeableConcept;
        one resource: Uri;
    }

    pub fn build(self) -> Result<SubscriptionTopicEventTrigger> {
        let node = SubscriptionTopicEventTrigger {
            base: self.base.freeze(),
            description: self.description,
            event: self.event,
            resource: self.resource,
        };
        finish(node, self.options)
    }
}

static CAN_FILTER_BY_FIELDS: [FieldDecl; 4] = [
    SubscriptionTopicCanFilterBy::DESCRIPTION,
    SubscriptionTopicCanFilterBy::RESOURCE,
    SubscriptionTopicCanFilterBy::FILTER_PARAMETER,
    SubscriptionTopicCanFilterBy::MODIFIER,
];

pub static SUBSCRIPTION_TOPIC_CAN_FILTER_BY: TypeDecl = TypeDecl::new(
    "SubscriptionTopic.CanFilterBy",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &CAN_FILTER_BY_FIELDS,
);

/// Properties by which a Subscription can filter notifications from the
/// SubscriptionTopic
///
/// Backbone element for SubscriptionTopic.canFilterBy
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopicCanFilterBy {
    base: BackboneBase,
    description: Option<Markdown>,
    resource: Option<Uri>,
    filter_parameter: Option<FhirString>,
    modifier: Vec<Coded<SubscriptionTopicFilterBySearchModifier>>,
}

impl SubscriptionTopicCanFilterBy {
    pub const DESCRIPTION: FieldDecl =
        FieldDecl::primitive("description", "markdown", Cardinality::OPTIONAL).summary();
    pub const RESOURCE: FieldDecl = FieldDecl::primitive("resource", "uri", Cardinality::OPTIONAL)
        .summary()
        .bound(RESOURCE_TYPE_BINDING);
    pub const FILTER_PARAMETER: FieldDecl =
        FieldDecl::primitive("filterParameter", "string", Cardinality::OPTIONAL).summary();
    pub const MODIFIER: FieldDecl = FieldDecl::primitive("modifier", "code", Cardinality::REPEATED)
        .summary()
        .bound(BindingDecl::new(
            "SubscriptionTopicFilterBySearchModifier",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/subscription-search-modifier|4.0.1",
        ));

    pub fn builder() -> SubscriptionTopicCanFilterByBuilder {
        SubscriptionTopicCanFilterByBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicCanFilterByBuilder {
        SubscriptionTopicCanFilterByBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            description: self.description.clone(),
            resource: self.resource.clone(),
            filter_parameter: self.filter_parameter.clone(),
            modifier: self.modifier.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        one description: Markdown;
        one resource: Uri;
        one filter_parameter: FhirString;
        list modifier: Coded<SubscriptionTopicFilterBySearchModifier>;
    }
}

ferrum_models::impl_backbone!(SubscriptionTopicCanFilterBy, SUBSCRIPTION_TOPIC_CAN_FILTER_BY);

impl Visitable for SubscriptionTopicCanFilterBy {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::DESCRIPTION.name, self.description.as_ref());
            accept_one(v, Self::RESOURCE.name, self.resource.as_ref());
            accept_one(v, Self::FILTER_PARAMETER.name, self.filter_parameter.as_ref());
            accept_list(v, Self::MODIFIER.name, &self.modifier);
        });
    }
}

impl Validate for SubscriptionTopicCanFilterBy {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicCanFilterByBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    description: Option<Markdown>,
    resource: Option<Uri>,
    filter_parameter: Option<FhirString>,
    modifier: Vec<Coded<SubscriptionTopicFilterBySearchModifier>>,
}

impl SubscriptionTopicCanFilterByBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one description: Markdown;
        one resource: Uri;
        one filter_parameter: FhirString;
        list modifier / replace_modifier: Coded<SubscriptionTopicFilterBySearchModifier>;
    }

    pub fn build(self) -> Result<SubscriptionTopicCanFilterBy> {
        let node = SubscriptionTopicCanFilterBy {
            base: self.base.freeze(),
            description: self.description,
            resource: self.resource,
            filter_parameter: self.filter_parameter,
            modifier: self.modifier,
        };
        finish(node, self.options)
    }
}

static NOTIFICATION_SHAPE_FIELDS: [FieldDecl; 3] = [
    SubscriptionTopicNotificationShape::RESOURCE,
    SubscriptionTopicNotificationShape::INCLUDE,
    SubscriptionTopicNotificationShape::REV_INCLUDE,
];

pub static SUBSCRIPTION_TOPIC_NOTIFICATION_SHAPE: TypeDecl = TypeDecl::new(
    "SubscriptionTopic.NotificationShape",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &NOTIFICATION_SHAPE_FIELDS,
);

/// Properties for describing the shape of notifications generated by this
/// topic
///
/// Backbone element for SubscriptionTopic.notificationShape
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTopicNotificationShape {
    base: BackboneBase,
    resource: Option<Uri>,
    include: Vec<FhirString>,
    rev_include: Vec<FhirString>,
}

impl SubscriptionTopicNotificationShape {
    pub const RESOURCE: FieldDecl = FieldDecl::primitive("resource", "uri", Cardinality::REQUIRED)
        .summary()
        .bound(RESOURCE_TYPE_BINDING);
    pub const INCLUDE: FieldDecl = FieldDecl::primitive("include", "string", Cardinality::REPEATED).summary();
    pub const REV_INCLUDE: FieldDecl =
        FieldDecl::primitive("revInclude", "string", Cardinality::REPEATED).summary();

    pub fn builder() -> SubscriptionTopicNotificationShapeBuilder {
        SubscriptionTopicNotificationShapeBuilder::default()
    }

    pub fn to_builder(&self) -> SubscriptionTopicNotificationShapeBuilder {
        SubscriptionTopicNotificationShapeBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            resource: self.resource.clone(),
            include: self.include.to_vec(),
            rev_include: self.rev_include.to_vec(),
        }
    }

    ferrum_models::node_getters! {
        one resource: Uri;
        list include: FhirString;
        list rev_include: FhirString;
    }
}

ferrum_models::impl_backbone!(SubscriptionTopicNotificationShape, SUBSCRIPTION_TOPIC_NOTIFICATION_SHAPE);

impl Visitable for SubscriptionTopicNotificationShape {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::RESOURCE.name, self.resource.as_ref());
            accept_list(v, Self::INCLUDE.name, &self.include);
            accept_list(v, Self::REV_INCLUDE.name, &self.rev_include);
        });
    }
}

impl Validate for SubscriptionTopicNotificationShape {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::RESOURCE, self.resource.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionTopicNotificationShapeBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    resource: Option<Uri>,
    include: Vec<FhirString>,
    rev_include: Vec<FhirString>,
}

impl SubscriptionTopicNotificationShapeBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one resource: Uri;
        list include / replace_include: FhirString;
        list rev_include / replace_rev_include: FhirString;
    }

    pub fn build(self) -> Result<SubscriptionTopicNotificationShape> {
        let node = SubscriptionTopicNotificationShape {
            base: self.base.freeze(),
            resource: self.resource,
            include: self.include,
            rev_include: self.rev_include,
        };
        finish(node, self.options)
    }
}

pub(crate) fn type_decls() -> [&'static TypeDecl; 6] {
    [
        &SUBSCRIPTION_TOPIC,
        &SUBSCRIPTION_TOPIC_RESOURCE_TRIGGER,
        &SUBSCRIPTION_TOPIC_QUERY_CRITERIA,
        &SUBSCRIPTION_TOPIC_EVENT_TRIGGER,
        &SUBSCRIPTION_TOPIC_CAN_FILTER_BY,
        &SUBSCRIPTION_TOPIC_NOTIFICATION_SHAPE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrum_models::Error;

    fn uri(value: &str) -> Uri {
        Uri::new(value).unwrap()
    }

    #[test]
    fn test_resource_trigger_requires_resource() {
        let err = SubscriptionTopicResourceTrigger::builder()
            .supported_interaction([Coded::from(MethodCode::Create)])
            .build()
            .unwrap_err();
        assert_eq!(err.path(), Some("resource"));

        let trigger = SubscriptionTopicResourceTrigger::builder()
            .resource(uri("http://hl7.org/fhir/StructureDefinition/Encounter"))
            .supported_interaction([Coded::from(MethodCode::Create), Coded::from(MethodCode::Update)])
            .build()
            .unwrap();
        assert_eq!(trigger.supported_interaction().len(), 2);
    }

    #[test]
    fn test_query_criteria_needs_content() {
        let err = SubscriptionTopicQueryCriteria::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyComposite { type_name: "SubscriptionTopic.ResourceTrigger.QueryCriteria" }
        ));

        let criteria = SubscriptionTopicQueryCriteria::builder()
            .current(FhirString::new("Encounter?status=finished").unwrap())
            .result_for_create(CriteriaNotExistsBehavior::TestPasses)
            .build()
            .unwrap();
        assert_eq!(
            criteria.result_for_create().and_then(|c| c.value()),
            Some(&CriteriaNotExistsBehavior::TestPasses)
        );
    }

    #[test]
    fn test_event_trigger_reports_first_missing_field() {
        let err = SubscriptionTopicEventTrigger::builder()
            .resource(uri("Encounter"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { ref path, .. } if path == "event"));
    }

    #[test]
    fn test_can_filter_by_modifiers_keep_order() {
        let filter = SubscriptionTopicCanFilterBy::builder()
            .filter_parameter(FhirString::new("patient").unwrap())
            .modifier([
                Coded::from(SubscriptionTopicFilterBySearchModifier::Equal),
                Coded::from(SubscriptionTopicFilterBySearchModifier::In),
            ])
            .build()
            .unwrap();
        let codes: Vec<_> = filter.modifier().iter().filter_map(|m| m.value()).collect();
        assert_eq!(
            codes,
            [
                &SubscriptionTopicFilterBySearchModifier::Equal,
                &SubscriptionTopicFilterBySearchModifier::In
            ]
        );
    }
}
