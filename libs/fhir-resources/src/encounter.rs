//! Encounter
//!
//! An interaction between a patient and healthcare provider(s) for the
//! purpose of providing healthcare service(s) or assessing the health status
//! of a patient.

use ferrum_models::builder::{BackboneBuilder, DomainResourceBuilder};
use ferrum_models::config::BuildOptions;
use ferrum_models::datatypes::{CodeableConcept, Coding, Duration, Identifier, Period, Reference};
use ferrum_models::node::{BackboneBase, DomainResourceBase};
use ferrum_models::primitive::{Coded, PositiveInt};
use ferrum_models::rules::{finish, Checker, Validate};
use ferrum_models::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use ferrum_models::visitor::{accept_list, accept_one, walk, Visitable, Visitor};
use ferrum_models::Result;

use crate::codes::{EncounterLocationStatus, EncounterStatus};

const STATUS_BINDING: BindingDecl = BindingDecl::new(
    "EncounterStatus",
    BindingStrength::Required,
    "http://hl7.org/fhir/ValueSet/encounter-status|4.1.0",
);

const CLASS_BINDING: BindingDecl = BindingDecl::new(
    "EncounterClass",
    BindingStrength::Extensible,
    "http://terminology.hl7.org/ValueSet/v3-ActEncounterCode",
);

static ENCOUNTER_FIELDS: [FieldDecl; 23] = [
    Encounter::IDENTIFIER,
    Encounter::STATUS,
    Encounter::STATUS_HISTORY,
    Encounter::CLASS,
    Encounter::CLASS_HISTORY,
    Encounter::TYPE,
    Encounter::SERVICE_TYPE,
    Encounter::PRIORITY,
    Encounter::SUBJECT,
    Encounter::EPISODE_OF_CARE,
    Encounter::BASED_ON,
    Encounter::PARTICIPANT,
    Encounter::APPOINTMENT,
    Encounter::PERIOD,
    Encounter::LENGTH,
    Encounter::REASON_CODE,
    Encounter::REASON_REFERENCE,
    Encounter::DIAGNOSIS,
    Encounter::ACCOUNT,
    Encounter::HOSPITALIZATION,
    Encounter::LOCATION,
    Encounter::SERVICE_PROVIDER,
    Encounter::PART_OF,
];

pub static ENCOUNTER: TypeDecl =
    TypeDecl::new("Encounter", TypeKind::Resource, Some("DomainResource"), &ENCOUNTER_FIELDS);

/// An interaction during which services are provided to the patient
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    base: DomainResourceBase,
    identifier: Vec<Identifier>,
    status: Option<Coded<EncounterStatus>>,
    status_history: Vec<EncounterStatusHistory>,
    class: Option<Coding>,
    class_history: Vec<EncounterClassHistory>,
    r#type: Vec<CodeableConcept>,
    service_type: Option<CodeableConcept>,
    priority: Option<CodeableConcept>,
    subject: Option<Reference>,
    episode_of_care: Vec<Reference>,
    based_on: Vec<Reference>,
    participant: Vec<EncounterParticipant>,
    appointment: Vec<Reference>,
    period: Option<Period>,
    length: Option<Duration>,
    reason_code: Vec<CodeableConcept>,
    reason_reference: Vec<Reference>,
    diagnosis: Vec<EncounterDiagnosis>,
    account: Vec<Reference>,
    hospitalization: Option<EncounterHospitalization>,
    location: Vec<EncounterLocation>,
    service_provider: Option<Reference>,
    part_of: Option<Reference>,
}

impl Encounter {
    pub const IDENTIFIER: FieldDecl =
        FieldDecl::complex("identifier", "Identifier", Cardinality::REPEATED).summary();
    pub const STATUS: FieldDecl = FieldDecl::primitive("status", "code", Cardinality::REQUIRED)
        .modifier()
        .summary()
        .bound(STATUS_BINDING);
    pub const STATUS_HISTORY: FieldDecl =
        FieldDecl::backbone("statusHistory", "Encounter.StatusHistory", Cardinality::REPEATED);
    pub const CLASS: FieldDecl = FieldDecl::complex("class", "Coding", Cardinality::REQUIRED)
        .summary()
        .bound(CLASS_BINDING);
    pub const CLASS_HISTORY: FieldDecl =
        FieldDecl::backbone("classHistory", "Encounter.ClassHistory", Cardinality::REPEATED);
    pub const TYPE: FieldDecl = FieldDecl::complex("type", "CodeableConcept", Cardinality::REPEATED)
        .summary()
        .bound(BindingDecl::new(
            "EncounterType",
            BindingStrength::Example,
            "http://hl7.org/fhir/ValueSet/encounter-type",
        ));
    pub const SERVICE_TYPE: FieldDecl =
        FieldDecl::complex("serviceType", "CodeableConcept", Cardinality::OPTIONAL)
            .summary()
            .bound(BindingDecl::new(
                "EncounterServiceType",
                BindingStrength::Example,
                "http://hl7.org/fhir/ValueSet/service-type",
            ));
    pub const PRIORITY: FieldDecl = FieldDecl::complex("priority", "CodeableConcept", Cardinality::OPTIONAL)
        .bound(BindingDecl::new(
            "Priority",
            BindingStrength::Example,
            "http://terminology.hl7.org/ValueSet/v3-ActPriority",
        ));
    pub const SUBJECT: FieldDecl =
        FieldDecl::reference("subject", Cardinality::OPTIONAL, &["Patient", "Group"]).summary();
    pub const EPISODE_OF_CARE: FieldDecl =
        FieldDecl::reference("episodeOfCare", Cardinality::REPEATED, &["EpisodeOfCare"]).summary();
    pub const BASED_ON: FieldDecl =
        FieldDecl::reference("basedOn", Cardinality::REPEATED, &["ServiceRequest"]);
    pub const PARTICIPANT: FieldDecl =
        FieldDecl::backbone("participant", "Encounter.Participant", Cardinality::REPEATED).summary();
    pub const APPOINTMENT: FieldDecl =
        FieldDecl::reference("appointment", Cardinality::REPEATED, &["Appointment"]).summary();
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::OPTIONAL);
    pub const LENGTH: FieldDecl = FieldDecl::complex("length", "Duration", Cardinality::OPTIONAL);
    pub const REASON_CODE: FieldDecl =
        FieldDecl::complex("reasonCode", "CodeableConcept", Cardinality::REPEATED)
            .summary()
            .bound(BindingDecl::new(
                "EncounterReason",
                BindingStrength::Preferred,
                "http://hl7.org/fhir/ValueSet/encounter-reason",
            ));
    pub const REASON_REFERENCE: FieldDecl = FieldDecl::reference(
        "reasonReference",
        Cardinality::REPEATED,
        &["Condition", "Procedure", "Observation", "ImmunizationRecommendation"],
    )
    .summary();
    pub const DIAGNOSIS: FieldDecl =
        FieldDecl::backbone("diagnosis", "Encounter.Diagnosis", Cardinality::REPEATED).summary();
    pub const ACCOUNT: FieldDecl = FieldDecl::reference("account", Cardinality::REPEATED, &["Account"]);
    pub const HOSPITALIZATION: FieldDecl =
        FieldDecl::backbone("hospitalization", "Encounter.Hospitalization", Cardinality::OPTIONAL);
    pub const LOCATION: FieldDecl =
        FieldDecl::backbone("location", "Encounter.Location", Cardinality::REPEATED);
    pub const SERVICE_PROVIDER: FieldDecl =
        FieldDecl::reference("serviceProvider", Cardinality::OPTIONAL, &["Organization"]);
    pub const PART_OF: FieldDecl = FieldDecl::reference("partOf", Cardinality::OPTIONAL, &["Encounter"]);

    pub fn builder() -> EncounterBuilder {
        EncounterBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterBuilder {
        EncounterBuilder {
            base: DomainResourceBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            identifier: self.identifier.to_vec(),
            status: self.status.clone(),
            status_history: self.status_history.to_vec(),
            class: self.class.clone(),
            class_history: self.class_history.to_vec(),
            r#type: self.r#type.to_vec(),
            service_type: self.service_type.clone(),
            priority: self.priority.clone(),
            subject: self.subject.clone(),
            episode_of_care: self.episode_of_care.to_vec(),
            based_on: self.based_on.to_vec(),
            participant: self.participant.to_vec(),
            appointment: self.appointment.to_vec(),
            period: self.period.clone(),
            length: self.length.clone(),
            reason_code: self.reason_code.to_vec(),
            reason_reference: self.reason_reference.to_vec(),
            diagnosis: self.diagnosis.to_vec(),
            account: self.account.to_vec(),
            hospitalization: self.hospitalization.clone(),
            location: self.location.to_vec(),
            service_provider: self.service_provider.clone(),
            part_of: self.part_of.clone(),
        }
    }

    ferrum_models::node_getters! {
        list identifier: Identifier;
        one status: Coded<EncounterStatus>;
        list status_history: EncounterStatusHistory;
        one class: Coding;
        list class_history: EncounterClassHistory;
        list r#type: CodeableConcept;
        one service_type: CodeableConcept;
        one priority: CodeableConcept;
        one subject: Reference;
        list episode_of_care: Reference;
        list based_on: Reference;
        list participant: EncounterParticipant;
        list appointment: Reference;
        one period: Period;
        one length: Duration;
        list reason_code: CodeableConcept;
        list reason_reference: Reference;
        list diagnosis: EncounterDiagnosis;
        list account: Reference;
        one hospitalization: EncounterHospitalization;
        list location: EncounterLocation;
        one service_provider: Reference;
        one part_of: Reference;
    }
}

ferrum_models::impl_domain_resource!(Encounter, ENCOUNTER);

impl Visitable for Encounter {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_list(v, Self::IDENTIFIER.name, &self.identifier);
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_list(v, Self::STATUS_HISTORY.name, &self.status_history);
            accept_one(v, Self::CLASS.name, self.class.as_ref());
            accept_list(v, Self::CLASS_HISTORY.name, &self.class_history);
            accept_list(v, Self::TYPE.name, &self.r#type);
            accept_one(v, Self::SERVICE_TYPE.name, self.service_type.as_ref());
            accept_one(v, Self::PRIORITY.name, self.priority.as_ref());
            accept_one(v, Self::SUBJECT.name, self.subject.as_ref());
            accept_list(v, Self::EPISODE_OF_CARE.name, &self.episode_of_care);
            accept_list(v, Self::BASED_ON.name, &self.based_on);
            accept_list(v, Self::PARTICIPANT.name, &self.participant);
            accept_list(v, Self::APPOINTMENT.name, &self.appointment);
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
            accept_one(v, Self::LENGTH.name, self.length.as_ref());
            accept_list(v, Self::REASON_CODE.name, &self.reason_code);
            accept_list(v, Self::REASON_REFERENCE.name, &self.reason_reference);
            accept_list(v, Self::DIAGNOSIS.name, &self.diagnosis);
            accept_list(v, Self::ACCOUNT.name, &self.account);
            accept_one(v, Self::HOSPITALIZATION.name, self.hospitalization.as_ref());
            accept_list(v, Self::LOCATION.name, &self.location);
            accept_one(v, Self::SERVICE_PROVIDER.name, self.service_provider.as_ref());
            accept_one(v, Self::PART_OF.name, self.part_of.as_ref());
        });
    }
}

impl Validate for Encounter {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::STATUS, self.status.as_ref())?;
        c.require(&Self::CLASS, self.class.as_ref())?;
        c.reference(&Self::SUBJECT, self.subject.as_ref())?;
        c.references(&Self::EPISODE_OF_CARE, &self.episode_of_care)?;
        c.references(&Self::BASED_ON, &self.based_on)?;
        c.references(&Self::APPOINTMENT, &self.appointment)?;
        c.references(&Self::REASON_REFERENCE, &self.reason_reference)?;
        c.references(&Self::ACCOUNT, &self.account)?;
        c.reference(&Self::SERVICE_PROVIDER, self.service_provider.as_ref())?;
        c.reference(&Self::PART_OF, self.part_of.as_ref())?;
        self.base.check(c)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterBuilder {
    base: DomainResourceBuilder,
    options: BuildOptions,
    identifier: Vec<Identifier>,
    status: Option<Coded<EncounterStatus>>,
    status_history: Vec<EncounterStatusHistory>,
    class: Option<Coding>,
    class_history: Vec<EncounterClassHistory>,
    r#type: Vec<CodeableConcept>,
    service_type: Option<CodeableConcept>,
    priority: Option<CodeableConcept>,
    subject: Option<Reference>,
    episode_of_care: Vec<Reference>,
    based_on: Vec<Reference>,
    participant: Vec<EncounterParticipant>,
    appointment: Vec<Reference>,
    period: Option<Period>,
    length: Option<Duration>,
    reason_code: Vec<CodeableConcept>,
    reason_reference: Vec<Reference>,
    diagnosis: Vec<EncounterDiagnosis>,
    account: Vec<Reference>,
    hospitalization: Option<EncounterHospitalization>,
    location: Vec<EncounterLocation>,
    service_provider: Option<Reference>,
    part_of: Option<Reference>,
}

impl EncounterBuilder {
    ferrum_models::domain_resource_builder_methods!();

    ferrum_models::builder_setters! {
        list identifier / replace_identifier: Identifier;
        one status: Coded<EncounterStatus>;
        list status_history / replace_status_history: EncounterStatusHistory;
        one class: Coding;
        list class_history / replace_class_history: EncounterClassHistory;
        list r#type / replace_type: CodeableConcept;
        one service_type: CodeableConcept;
        one priority: CodeableConcept;
        one subject: Reference;
        list episode_of_care / replace_episode_of_care: Reference;
        list based_on / replace_based_on: Reference;
        list participant / replace_participant: EncounterParticipant;
        list appointment / replace_appointment: Reference;
        one period: Period;
        one length: Duration;
        list reason_code / replace_reason_code: CodeableConcept;
        list reason_reference / replace_reason_reference: Reference;
        list diagnosis / replace_diagnosis: EncounterDiagnosis;
        list account / replace_account: Reference;
        one hospitalization: EncounterHospitalization;
        list location / replace_location: EncounterLocation;
        one service_provider: Reference;
        one part_of: Reference;
    }

    pub fn build(self) -> Result<Encounter> {
        let node = Encounter {
            base: self.base.freeze(),
            identifier: self.identifier,
            status: self.status,
            status_history: self.status_history,
            class: self.class,
            class_history: self.class_history,
            r#type: self.r#type,
            service_type: self.service_type,
            priority: self.priority,
            subject: self.subject,
            episode_of_care: self.episode_of_care,
            based_on: self.based_on,
            participant: self.participant,
            appointment: self.appointment,
            period: self.period,
            length: self.length,
            reason_code: self.reason_code,
            reason_reference: self.reason_reference,
            diagnosis: self.diagnosis,
            account: self.account,
            hospitalization: self.hospitalization,
            location: self.location,
            service_provider: self.service_provider,
            part_of: self.part_of,
        };
        finish(node, self.options)
    }
}

static STATUS_HISTORY_FIELDS: [FieldDecl; 2] =
    [EncounterStatusHistory::STATUS, EncounterStatusHistory::PERIOD];

pub static ENCOUNTER_STATUS_HISTORY: TypeDecl = TypeDecl::new(
    "Encounter.StatusHistory",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &STATUS_HISTORY_FIELDS,
);

/// List of past encounter statuses
///
/// Backbone element for Encounter.statusHistory
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterStatusHistory {
    base: BackboneBase,
    status: Option<Coded<EncounterStatus>>,
    period: Option<Period>,
}

impl EncounterStatusHistory {
    pub const STATUS: FieldDecl =
        FieldDecl::primitive("status", "code", Cardinality::REQUIRED).bound(STATUS_BINDING);
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::REQUIRED);

    pub fn builder() -> EncounterStatusHistoryBuilder {
        EncounterStatusHistoryBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterStatusHistoryBuilder {
        EncounterStatusHistoryBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            status: self.status.clone(),
            period: self.period.clone(),
        }
    }

    ferrum_models::node_getters! {
        one status: Coded<EncounterStatus>;
        one period: Period;
    }
}

ferrum_models::impl_backbone!(EncounterStatusHistory, ENCOUNTER_STATUS_HISTORY);

impl Visitable for EncounterStatusHistory {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
        });
    }
}

impl Validate for EncounterStatusHistory {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::STATUS, self.status.as_ref())?;
        c.require(&Self::PERIOD, self.period.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterStatusHistoryBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    status: Option<Coded<EncounterStatus>>,
    period: Option<Period>,
}

impl EncounterStatusHistoryBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one status: Coded<EncounterStatus>;
        one period: Period;
    }

    pub fn build(self) -> Result<EncounterStatusHistory> {
        let node = EncounterStatusHistory {
            base: self.base.freeze(),
            status: self.status,
            period: self.period,
        };
        finish(node, self.options)
    }
}

static CLASS_HISTORY_FIELDS: [FieldDecl; 2] = [EncounterClassHistory::CLASS, EncounterClassHistory::PERIOD];

pub static ENCOUNTER_CLASS_HISTORY: TypeDecl = TypeDecl::new(
    "Encounter.ClassHistory",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &CLASS_HISTORY_FIELDS,
);

/// List of past encounter classes
///
/// Backbone element for Encounter.classHistory
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterClassHistory {
    base: BackboneBase,
    class: Option<Coding>,
    period: Option<Period>,
}

impl EncounterClassHistory {
    pub const CLASS: FieldDecl =
        FieldDecl::complex("class", "Coding", Cardinality::REQUIRED).bound(CLASS_BINDING);
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::REQUIRED);

    pub fn builder() -> EncounterClassHistoryBuilder {
        EncounterClassHistoryBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterClassHistoryBuilder {
        EncounterClassHistoryBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            class: self.class.clone(),
            period: self.period.clone(),
        }
    }

    ferrum_models::node_getters! {
        one class: Coding;
        one period: Period;
    }
}

ferrum_models::impl_backbone!(EncounterClassHistory, ENCOUNTER_CLASS_HISTORY);

impl Visitable for EncounterClassHistory {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::CLASS.name, self.class.as_ref());
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
        });
    }
}

impl Validate for EncounterClassHistory {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::CLASS, self.class.as_ref())?;
        c.require(&Self::PERIOD, self.period.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterClassHistoryBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    class: Option<Coding>,
    period: Option<Period>,
}

impl EncounterClassHistoryBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one class: Coding;
        one period: Period;
    }

    pub fn build(self) -> Result<EncounterClassHistory> {
        let node = EncounterClassHistory {
            base: self.base.freeze(),
            class: self.class,
            period: self.period,
        };
        finish(node, self.options)
    }
}

static PARTICIPANT_FIELDS: [FieldDecl; 3] = [
    EncounterParticipant::TYPE,
    EncounterParticipant::PERIOD,
    EncounterParticipant::INDIVIDUAL,
];

pub static ENCOUNTER_PARTICIPANT: TypeDecl = TypeDecl::new(
    "Encounter.Participant",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &PARTICIPANT_FIELDS,
);

/// List of participants involved in the encounter
///
/// Backbone element for Encounter.participant
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterParticipant {
    base: BackboneBase,
    r#type: Vec<CodeableConcept>,
    period: Option<Period>,
    individual: Option<Reference>,
}

impl EncounterParticipant {
    pub const TYPE: FieldDecl = FieldDecl::complex("type", "CodeableConcept", Cardinality::REPEATED)
        .summary()
        .bound(BindingDecl::new(
            "ParticipantType",
            BindingStrength::Extensible,
            "http://hl7.org/fhir/ValueSet/encounter-participant-type",
        ));
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::OPTIONAL);
    pub const INDIVIDUAL: FieldDecl = FieldDecl::reference(
        "individual",
        Cardinality::OPTIONAL,
        &["Practitioner", "PractitionerRole", "RelatedPerson"],
    )
    .summary();

    pub fn builder() -> EncounterParticipantBuilder {
        EncounterParticipantBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterParticipantBuilder {
        EncounterParticipantBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            r#type: self.r#type.to_vec(),
            period: self.period.clone(),
            individual: self.individual.clone(),
        }
    }

    ferrum_models::node_getters! {
        list r#type: CodeableConcept;
        one period: Period;
        one individual: Reference;
    }
}

ferrum_models::impl_backbone!(EncounterParticipant, ENCOUNTER_PARTICIPANT);

impl Visitable for EncounterParticipant {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_list(v, Self::TYPE.name, &self.r#type);
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
            accept_one(v, Self::INDIVIDUAL.name, self.individual.as_ref());
        });
    }
}

impl Validate for EncounterParticipant {
    fn check(&self, c: &Checker) -> Result<()> {
        c.reference(&Self::INDIVIDUAL, self.individual.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterParticipantBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    r#type: Vec<CodeableConcept>,
    period: Option<Period>,
    individual: Option<Reference>,
}

impl EncounterParticipantBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        list r#type / replace_type: CodeableConcept;
        one period: Period;
        one individual: Reference;
    }

    pub fn build(self) -> Result<EncounterParticipant> {
        let node = EncounterParticipant {
            base: self.base.freeze(),
            r#type: self.r#type,
            period: self.period,
            individual: self.individual,
        };
        finish(node, self.options)
    }
}

static DIAGNOSIS_FIELDS: [FieldDecl; 3] = [
    EncounterDiagnosis::CONDITION,
    EncounterDiagnosis::USE,
    EncounterDiagnosis::RANK,
];

pub static ENCOUNTER_DIAGNOSIS: TypeDecl = TypeDecl::new(
    "Encounter.Diagnosis",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &DIAGNOSIS_FIELDS,
);

/// The list of diagnosis relevant to this encounter
///
/// Backbone element for Encounter.diagnosis
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterDiagnosis {
    base: BackboneBase,
    condition: Option<Reference>,
    r#use: Option<CodeableConcept>,
    rank: Option<PositiveInt>,
}

impl EncounterDiagnosis {
    pub const CONDITION: FieldDecl =
        FieldDecl::reference("condition", Cardinality::REQUIRED, &["Condition", "Procedure"]).summary();
    pub const USE: FieldDecl = FieldDecl::complex("use", "CodeableConcept", Cardinality::OPTIONAL).bound(
        BindingDecl::new(
            "DiagnosisRole",
            BindingStrength::Preferred,
            "http://hl7.org/fhir/ValueSet/diagnosis-role",
        ),
    );
    pub const RANK: FieldDecl = FieldDecl::primitive("rank", "positiveInt", Cardinality::OPTIONAL);

    pub fn builder() -> EncounterDiagnosisBuilder {
        EncounterDiagnosisBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterDiagnosisBuilder {
        EncounterDiagnosisBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            condition: self.condition.clone(),
            r#use: self.r#use.clone(),
            rank: self.rank.clone(),
        }
    }

    ferrum_models::node_getters! {
        one condition: Reference;
        one r#use: CodeableConcept;
        one rank: PositiveInt;
    }
}

ferrum_models::impl_backbone!(EncounterDiagnosis, ENCOUNTER_DIAGNOSIS);

impl Visitable for EncounterDiagnosis {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::CONDITION.name, self.condition.as_ref());
            accept_one(v, Self::USE.name, self.r#use.as_ref());
            accept_one(v, Self::RANK.name, self.rank.as_ref());
        });
    }
}

impl Validate for EncounterDiagnosis {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::CONDITION, self.condition.as_ref())?;
        c.reference(&Self::CONDITION, self.condition.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterDiagnosisBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    condition: Option<Reference>,
    r#use: Option<CodeableConcept>,
    rank: Option<PositiveInt>,
}

impl EncounterDiagnosisBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one condition: Reference;
        one r#use: CodeableConcept;
        one rank: PositiveInt;
    }

    pub fn build(self) -> Result<EncounterDiagnosis> {
        let node = EncounterDiagnosis {
            base: self.base.freeze(),
            condition: self.condition,
            r#use: self.r#use,
            rank: self.rank,
        };
        finish(node, self.options)
    }
}

static HOSPITALIZATION_FIELDS: [FieldDecl; 9] = [
    EncounterHospitalization::PRE_ADMISSION_IDENTIFIER,
    EncounterHospitalization::ORIGIN,
    EncounterHospitalization::ADMIT_SOURCE,
    EncounterHospitalization::RE_ADMISSION,
    EncounterHospitalization::DIET_PREFERENCE,
    EncounterHospitalization::SPECIAL_COURTESY,
    EncounterHospitalization::SPECIAL_ARRANGEMENT,
    EncounterHospitalization::DESTINATION,
    EncounterHospitalization::DISCHARGE_DISPOSITION,
];

pub static ENCOUNTER_HOSPITALIZATION: TypeDecl = TypeDecl::new(
    "Encounter.Hospitalization",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &HOSPITALIZATION_FIELDS,
);

/// Details about the admission to a healthcare service
///
/// Backbone element for Encounter.hospitalization
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterHospitalization {
    base: BackboneBase,
    pre_admission_identifier: Option<Identifier>,
    origin: Option<Reference>,
    admit_source: Option<CodeableConcept>,
    re_admission: Option<CodeableConcept>,
    diet_preference: Vec<CodeableConcept>,
    special_courtesy: Vec<CodeableConcept>,
    special_arrangement: Vec<CodeableConcept>,
    destination: Option<Reference>,
    discharge_disposition: Option<CodeableConcept>,
}

impl EncounterHospitalization {
    pub const PRE_ADMISSION_IDENTIFIER: FieldDecl =
        FieldDecl::complex("preAdmissionIdentifier", "Identifier", Cardinality::OPTIONAL);
    pub const ORIGIN: FieldDecl =
        FieldDecl::reference("origin", Cardinality::OPTIONAL, &["Location", "Organization"]);
    pub const ADMIT_SOURCE: FieldDecl = FieldDecl::complex("admitSource", "CodeableConcept", Cardinality::OPTIONAL)
        .bound(BindingDecl::new(
            "AdmitSource",
            BindingStrength::Preferred,
            "http://hl7.org/fhir/ValueSet/encounter-admit-source",
        ));
    pub const RE_ADMISSION: FieldDecl = FieldDecl::complex("reAdmission", "CodeableConcept", Cardinality::OPTIONAL)
        .bound(BindingDecl::new(
            "ReAdmissionType",
            BindingStrength::Example,
            "http://terminology.hl7.org/ValueSet/v2-0092",
        ));
    pub const DIET_PREFERENCE: FieldDecl =
        FieldDecl::complex("dietPreference", "CodeableConcept", Cardinality::REPEATED).bound(BindingDecl::new(
            "PatientDiet",
            BindingStrength::Example,
            "http://hl7.org/fhir/ValueSet/encounter-diet",
        ));
    pub const SPECIAL_COURTESY: FieldDecl =
        FieldDecl::complex("specialCourtesy", "CodeableConcept", Cardinality::REPEATED).bound(BindingDecl::new(
            "Courtesies",
            BindingStrength::Preferred,
            "http://hl7.org/fhir/ValueSet/encounter-special-courtesy",
        ));
    pub const SPECIAL_ARRANGEMENT: FieldDecl =
        FieldDecl::complex("specialArrangement", "CodeableConcept", Cardinality::REPEATED).bound(
            BindingDecl::new(
                "Arrangements",
                BindingStrength::Preferred,
                "http://hl7.org/fhir/ValueSet/encounter-special-arrangements",
            ),
        );
    pub const DESTINATION: FieldDecl =
        FieldDecl::reference("destination", Cardinality::OPTIONAL, &["Location", "Organization"]);
    pub const DISCHARGE_DISPOSITION: FieldDecl =
        FieldDecl::complex("dischargeDisposition", "CodeableConcept", Cardinality::OPTIONAL).bound(
            BindingDecl::new(
                "DischargeDisp",
                BindingStrength::Example,
                "http://hl7.org/fhir/ValueSet/encounter-discharge-disposition",
            ),
        );

    pub fn builder() -> EncounterHospitalizationBuilder {
        EncounterHospitalizationBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterHospitalizationBuilder {
        EncounterHospitalizationBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            pre_admission_identifier: self.pre_admission_identifier.clone(),
            origin: self.origin.clone(),
            admit_source: self.admit_source.clone(),
            re_admission: self.re_admission.clone(),
            diet_preference: self.diet_preference.to_vec(),
            special_courtesy: self.special_courtesy.to_vec(),
            special_arrangement: self.special_arrangement.to_vec(),
            destination: self.destination.clone(),
            discharge_disposition: self.discharge_disposition.clone(),
        }
    }

    ferrum_models::node_getters! {
        one pre_admission_identifier: Identifier;
        one origin: Reference;
        one admit_source: CodeableConcept;
        one re_admission: CodeableConcept;
        list diet_preference: CodeableConcept;
        list special_courtesy: CodeableConcept;
        list special_arrangement: CodeableConcept;
        one destination: Reference;
        one discharge_disposition: CodeableConcept;
    }
}

ferrum_models::impl_backbone!(EncounterHospitalization, ENCOUNTER_HOSPITALIZATION);

impl Visitable for EncounterHospitalization {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::PRE_ADMISSION_IDENTIFIER.name, self.pre_admission_identifier.as_ref());
            accept_one(v, Self::ORIGIN.name, self.origin.as_ref());
            accept_one(v, Self::ADMIT_SOURCE.name, self.admit_source.as_ref());
            accept_one(v, Self::RE_ADMISSION.name, self.re_admission.as_ref());
            accept_list(v, Self::DIET_PREFERENCE.name, &self.diet_preference);
            accept_list(v, Self::SPECIAL_COURTESY.name, &self.special_courtesy);
            accept_list(v, Self::SPECIAL_ARRANGEMENT.name, &self.special_arrangement);
            accept_one(v, Self::DESTINATION.name, self.destination.as_ref());
            accept_one(v, Self::DISCHARGE_DISPOSITION.name, self.discharge_disposition.as_ref());
        });
    }
}

impl Validate for EncounterHospitalization {
    fn check(&self, c: &Checker) -> Result<()> {
        c.reference(&Self::ORIGIN, self.origin.as_ref())?;
        c.reference(&Self::DESTINATION, self.destination.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterHospitalizationBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    pre_admission_identifier: Option<Identifier>,
    origin: Option<Reference>,
    admit_source: Option<CodeableConcept>,
    re_admission: Option<CodeableConcept>,
    diet_preference: Vec<CodeableConcept>,
    special_courtesy: Vec<CodeableConcept>,
    special_arrangement: Vec<CodeableConcept>,
    destination: Option<Reference>,
    discharge_disposition: Option<CodeableConcept>,
}

impl EncounterHospitalizationBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one pre_admission_identifier: Identifier;
        one origin: Reference;
        one admit_source: CodeableConcept;
        one re_admission: CodeableConcept;
        list diet_preference / replace_diet_preference: CodeableConcept;
        list special_courtesy / replace_special_courtesy: CodeableConcept;
        list special_arrangement / replace_special_arrangement: CodeableConcept;
        one destination: Reference;
        one discharge_disposition: CodeableConcept;
    }

    pub fn build(self) -> Result<EncounterHospitalization> {
        let node = EncounterHospitalization {
            base: self.base.freeze(),
            pre_admission_identifier: self.pre_admission_identifier,
            origin: self.origin,
            admit_source: self.admit_source,
            re_admission: self.re_admission,
            diet_preference: self.diet_preference,
            special_courtesy: self.special_courtesy,
            special_arrangement: self.special_arrangement,
            destination: self.destination,
            discharge_disposition: self.discharge_disposition,
        };
        finish(node, self.options)
    }
}

static LOCATION_FIELDS: [FieldDecl; 4] = [
    EncounterLocation::LOCATION,
    EncounterLocation::STATUS,
    EncounterLocation::PHYSICAL_TYPE,
    EncounterLocation::PERIOD,
];

pub static ENCOUNTER_LOCATION: TypeDecl = TypeDecl::new(
    "Encounter.Location",
    TypeKind::BackboneElement,
    Some("BackboneElement"),
    &LOCATION_FIELDS,
);

/// List of locations where the patient has been
///
/// Backbone element for Encounter.location
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterLocation {
    base: BackboneBase,
    location: Option<Reference>,
    status: Option<Coded<EncounterLocationStatus>>,
    physical_type: Option<CodeableConcept>,
    period: Option<Period>,
}

impl EncounterLocation {
    pub const LOCATION: FieldDecl = FieldDecl::reference("location", Cardinality::REQUIRED, &["Location"]);
    pub const STATUS: FieldDecl = FieldDecl::primitive("status", "code", Cardinality::OPTIONAL).bound(
        BindingDecl::new(
            "EncounterLocationStatus",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/encounter-location-status|4.1.0",
        ),
    );
    pub const PHYSICAL_TYPE: FieldDecl =
        FieldDecl::complex("physicalType", "CodeableConcept", Cardinality::OPTIONAL).bound(BindingDecl::new(
            "PhysicalType",
            BindingStrength::Example,
            "http://hl7.org/fhir/ValueSet/location-physical-type",
        ));
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::OPTIONAL);

    pub fn builder() -> EncounterLocationBuilder {
        EncounterLocationBuilder::default()
    }

    pub fn to_builder(&self) -> EncounterLocationBuilder {
        EncounterLocationBuilder {
            base: BackboneBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            location: self.location.clone(),
            status: self.status.clone(),
            physical_type: self.physical_type.clone(),
            period: self.period.clone(),
        }
    }

    ferrum_models::node_getters! {
        one location: Reference;
        one status: Coded<EncounterLocationStatus>;
        one physical_type: CodeableConcept;
        one period: Period;
    }
}

ferrum_models::impl_backbone!(EncounterLocation, ENCOUNTER_LOCATION);

impl Visitable for EncounterLocation {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::LOCATION.name, self.location.as_ref());
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_one(v, Self::PHYSICAL_TYPE.name, self.physical_type.as_ref());
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
        });
    }
}

impl Validate for EncounterLocation {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::LOCATION, self.location.as_ref())?;
        c.reference(&Self::LOCATION, self.location.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncounterLocationBuilder {
    base: BackboneBuilder,
    options: BuildOptions,
    location: Option<Reference>,
    status: Option<Coded<EncounterLocationStatus>>,
    physical_type: Option<CodeableConcept>,
    period: Option<Period>,
}

impl EncounterLocationBuilder {
    ferrum_models::backbone_builder_methods!();

    ferrum_models::builder_setters! {
        one location: Reference;
        one status: Coded<EncounterLocationStatus>;
        one physical_type: CodeableConcept;
        one period: Period;
    }

    pub fn build(self) -> Result<EncounterLocation> {
        let node = EncounterLocation {
            base: self.base.freeze(),
            location: self.location,
            status: self.status,
            physical_type: self.physical_type,
            period: self.period,
        };
        finish(node, self.options)
    }
}

pub(crate) fn type_decls() -> [&'static TypeDecl; 7] {
    [
        &ENCOUNTER,
        &ENCOUNTER_STATUS_HISTORY,
        &ENCOUNTER_CLASS_HISTORY,
        &ENCOUNTER_PARTICIPANT,
        &ENCOUNTER_DIAGNOSIS,
        &ENCOUNTER_HOSPITALIZATION,
        &ENCOUNTER_LOCATION,
    ]
}
