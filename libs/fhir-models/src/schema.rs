//! Schema declarations
//!
//! Declarative, generator-shaped metadata for every node type: field names,
//! cardinalities, declared types, reference target allow-lists, choice types
//! and terminology bindings. Builders consume these declarations in their
//! rule checks; [`TypeRegistry`] answers lookups over them.

use std::collections::HashMap;

/// Cardinality of a field (min..max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    /// Minimum occurrences
    pub min: u32,
    /// Maximum occurrences (None means unbounded/*)
    pub max: Option<u32>,
}

impl Cardinality {
    /// 0..1
    pub const OPTIONAL: Self = Self::new(0, Some(1));
    /// 1..1
    pub const REQUIRED: Self = Self::new(1, Some(1));
    /// 0..*
    pub const REPEATED: Self = Self::new(0, None);
    /// 1..*
    pub const REQUIRED_REPEATED: Self = Self::new(1, None);

    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Check if this field is a list
    pub fn is_array(&self) -> bool {
        self.max.map(|m| m > 1).unwrap_or(true)
    }

    /// Check if this field is optional
    pub fn is_optional(&self) -> bool {
        self.min == 0
    }

    /// Check if this field is required
    pub fn is_required(&self) -> bool {
        self.min > 0
    }
}

/// Kind of FHIR type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// FHIR Resource (e.g., Encounter, TestReport)
    Resource,
    /// Complex datatype (e.g., Coding, Period, Reference)
    ComplexType,
    /// Primitive type (e.g., string, code, boolean)
    PrimitiveType,
    /// Backbone element (nested complex element within a resource)
    BackboneElement,
}

/// Declared type category of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Primitive,
    Complex,
    Backbone,
    Reference,
    Resource,
    /// `name[x]` element; see [`FieldDecl::choice_types`]
    Choice,
}

/// Binding strength of a coded element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

impl BindingStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Extensible => "extensible",
            Self::Preferred => "preferred",
            Self::Example => "example",
        }
    }
}

/// Link between a coded field and an external value set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingDecl {
    pub name: &'static str,
    pub strength: BindingStrength,
    pub value_set: &'static str,
}

impl BindingDecl {
    pub const fn new(name: &'static str, strength: BindingStrength, value_set: &'static str) -> Self {
        Self {
            name,
            strength,
            value_set,
        }
    }
}

/// One declared field of a node type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Element name as it appears in the schema (e.g. "class", "assert")
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub field_type: FieldType,
    /// Declared type name ("code", "CodeableConcept", "Encounter.Participant", ...)
    pub type_name: &'static str,
    /// Acceptable target resource types of a reference field
    pub reference_targets: &'static [&'static str],
    /// Allowed datatypes of a choice field
    pub choice_types: &'static [&'static str],
    pub binding: Option<BindingDecl>,
    pub is_modifier: bool,
    pub is_summary: bool,
}

impl FieldDecl {
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        field_type: FieldType,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name,
            cardinality,
            field_type,
            type_name,
            reference_targets: &[],
            choice_types: &[],
            binding: None,
            is_modifier: false,
            is_summary: false,
        }
    }

    pub const fn primitive(name: &'static str, type_name: &'static str, cardinality: Cardinality) -> Self {
        Self::new(name, type_name, FieldType::Primitive, cardinality)
    }

    pub const fn complex(name: &'static str, type_name: &'static str, cardinality: Cardinality) -> Self {
        Self::new(name, type_name, FieldType::Complex, cardinality)
    }

    pub const fn backbone(name: &'static str, type_name: &'static str, cardinality: Cardinality) -> Self {
        Self::new(name, type_name, FieldType::Backbone, cardinality)
    }

    pub const fn reference(
        name: &'static str,
        cardinality: Cardinality,
        targets: &'static [&'static str],
    ) -> Self {
        Self {
            reference_targets: targets,
            ..Self::new(name, "Reference", FieldType::Reference, cardinality)
        }
    }

    pub const fn resource(name: &'static str, cardinality: Cardinality) -> Self {
        Self::new(name, "Resource", FieldType::Resource, cardinality)
    }

    pub const fn choice(name: &'static str, cardinality: Cardinality, types: &'static [&'static str]) -> Self {
        Self {
            choice_types: types,
            ..Self::new(name, "Element", FieldType::Choice, cardinality)
        }
    }

    /// Reference targets for a choice field that admits `Reference`.
    pub const fn targets(self, targets: &'static [&'static str]) -> Self {
        Self {
            reference_targets: targets,
            ..self
        }
    }

    pub const fn bound(self, binding: BindingDecl) -> Self {
        Self {
            binding: Some(binding),
            ..self
        }
    }

    pub const fn modifier(self) -> Self {
        Self {
            is_modifier: true,
            ..self
        }
    }

    pub const fn summary(self) -> Self {
        Self {
            is_summary: true,
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.cardinality.is_required()
    }

    pub fn is_repeating(&self) -> bool {
        self.cardinality.is_array()
    }

    /// Whether a reference with the given target type is acceptable here.
    /// A `Resource` entry in the allow-list admits every resource type.
    pub fn accepts_target(&self, resource_type: &str) -> bool {
        self.reference_targets
            .iter()
            .any(|t| *t == resource_type || *t == "Resource")
    }
}

/// Pair of fields of which exactly one must be populated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub first: &'static str,
    pub second: &'static str,
}

/// Declaration of one node type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDecl {
    /// Type name ("Encounter", "Encounter.Participant", "string", ...)
    pub name: &'static str,
    pub kind: TypeKind,
    /// Supertype whose fields precede this type's own fields
    pub base: Option<&'static str>,
    /// Own fields, in canonical order
    pub fields: &'static [FieldDecl],
    pub choice_groups: &'static [ChoiceGroup],
}

impl TypeDecl {
    pub const fn new(
        name: &'static str,
        kind: TypeKind,
        base: Option<&'static str>,
        fields: &'static [FieldDecl],
    ) -> Self {
        Self {
            name,
            kind,
            base,
            fields,
            choice_groups: &[],
        }
    }

    pub const fn with_choice_groups(self, choice_groups: &'static [ChoiceGroup]) -> Self {
        Self {
            choice_groups,
            ..self
        }
    }

    /// Look up one of this type's own fields.
    pub fn field(&self, name: &str) -> Option<&'static FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_resource(&self) -> bool {
        self.kind == TypeKind::Resource
    }
}

/// Registry of node type declarations
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// All declarations indexed by type name
    types: HashMap<&'static str, &'static TypeDecl>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the framework's own declarations: the abstract
    /// bases, primitives and general-purpose datatypes.
    pub fn core() -> Self {
        let mut registry = Self::new();
        registry.extend(crate::node::base_type_decls());
        registry.extend(crate::primitive::primitive_type_decls());
        registry.extend(crate::datatypes::datatype_decls());
        registry
    }

    /// Add a declaration to the registry
    pub fn register(&mut self, decl: &'static TypeDecl) {
        self.types.insert(decl.name, decl);
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = &'static TypeDecl>) {
        for decl in decls {
            self.register(decl);
        }
    }

    /// Get a declaration by its type name
    pub fn get(&self, name: &str) -> Option<&'static TypeDecl> {
        self.types.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all declarations
    pub fn types(&self) -> impl Iterator<Item = &'static TypeDecl> + '_ {
        self.types.values().copied()
    }

    /// Get all declarations of a given kind
    pub fn types_of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &'static TypeDecl> + '_ {
        self.types().filter(move |t| t.kind == kind)
    }

    /// Supertype chain, most-derived first
    pub fn closure(&self, name: &str) -> Vec<&'static TypeDecl> {
        let mut chain = Vec::new();
        let mut current = self.get(name);
        while let Some(decl) = current {
            chain.push(decl);
            current = decl.base.and_then(|base| self.get(base));
        }
        chain
    }

    /// All fields of a type including inherited ones, in canonical order
    /// (supertype fields first).
    pub fn fields(&self, name: &str) -> Vec<&'static FieldDecl> {
        self.closure(name)
            .into_iter()
            .rev()
            .flat_map(|decl| decl.fields.iter())
            .collect()
    }

    /// Find a field on a type or any of its supertypes
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&'static FieldDecl> {
        self.closure(type_name)
            .into_iter()
            .find_map(|decl| decl.field(field_name))
    }

    /// Type that declares `field_name` for `type_name`
    pub fn declaring_type(&self, type_name: &str, field_name: &str) -> Option<&'static TypeDecl> {
        self.closure(type_name)
            .into_iter()
            .find(|decl| decl.field(field_name).is_some())
    }

    pub fn reference_targets(&self, type_name: &str, field_name: &str) -> &'static [&'static str] {
        self.field(type_name, field_name)
            .map(|f| f.reference_targets)
            .unwrap_or(&[])
    }

    pub fn choice_types(&self, type_name: &str, field_name: &str) -> &'static [&'static str] {
        self.field(type_name, field_name)
            .map(|f| f.choice_types)
            .unwrap_or(&[])
    }

    pub fn binding(&self, type_name: &str, field_name: &str) -> Option<BindingDecl> {
        self.field(type_name, field_name).and_then(|f| f.binding)
    }

    pub fn is_required_field(&self, type_name: &str, field_name: &str) -> bool {
        self.field(type_name, field_name)
            .map(|f| f.is_required())
            .unwrap_or(false)
    }

    pub fn is_repeating_field(&self, type_name: &str, field_name: &str) -> bool {
        self.field(type_name, field_name)
            .map(|f| f.is_repeating())
            .unwrap_or(false)
    }

    pub fn is_choice_field(&self, type_name: &str, field_name: &str) -> bool {
        self.field(type_name, field_name)
            .map(|f| f.field_type == FieldType::Choice)
            .unwrap_or(false)
    }
}

/// Check whether `name` is a FHIR R4 resource type
pub fn is_resource_type(name: &str) -> bool {
    RESOURCE_TYPES.contains(name)
}

/// Type name carried in `Reference.type`, with the core StructureDefinition
/// prefix stripped from absolute URLs.
pub fn resource_type_from_uri(uri: &str) -> &str {
    uri.strip_prefix("http://hl7.org/fhir/StructureDefinition/")
        .unwrap_or(uri)
}

static RESOURCE_TYPES: phf::Set<&'static str> = phf::phf_set! {
    "Account", "ActivityDefinition", "AdministrableProductDefinition",
    "AdverseEvent", "AllergyIntolerance", "Appointment", "AppointmentResponse",
    "AuditEvent", "Basic", "Binary", "BiologicallyDerivedProduct", "BodyStructure",
    "Bundle", "CapabilityStatement", "CarePlan", "CareTeam", "CatalogEntry",
    "ChargeItem", "ChargeItemDefinition", "Citation", "Claim", "ClaimResponse",
    "ClinicalImpression", "ClinicalUseDefinition", "CodeSystem", "Communication",
    "CommunicationRequest", "CompartmentDefinition", "Composition", "ConceptMap",
    "Condition", "Consent", "Contract", "Coverage", "CoverageEligibilityRequest",
    "CoverageEligibilityResponse", "DetectedIssue", "Device", "DeviceDefinition",
    "DeviceMetric", "DeviceRequest", "DeviceUseStatement", "DiagnosticReport",
    "DocumentManifest", "DocumentReference", "EffectEvidenceSynthesis", "Encounter",
    "Endpoint", "EnrollmentRequest", "EnrollmentResponse", "EpisodeOfCare",
    "EventDefinition", "Evidence", "EvidenceReport", "EvidenceVariable",
    "ExampleScenario", "ExplanationOfBenefit", "FamilyMemberHistory", "Flag",
    "Goal", "GraphDefinition", "Group", "GuidanceResponse", "HealthcareService",
    "ImagingStudy", "Immunization", "ImmunizationEvaluation",
    "ImmunizationRecommendation", "ImplementationGuide", "Ingredient",
    "InsurancePlan", "Invoice", "Library", "Linkage", "List", "Location",
    "ManufacturedItemDefinition", "Measure", "MeasureReport", "Media", "Medication",
    "MedicationAdministration", "MedicationDispense", "MedicationKnowledge",
    "MedicationRequest", "MedicationStatement", "MedicinalProduct",
    "MedicinalProductAuthorization", "MedicinalProductContraindication",
    "MedicinalProductDefinition", "MedicinalProductIndication",
    "MedicinalProductIngredient", "MedicinalProductInteraction",
    "MedicinalProductManufactured", "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical", "MedicinalProductUndesirableEffect",
    "MessageDefinition", "MessageHeader", "MolecularSequence", "NamingSystem",
    "NutritionOrder", "NutritionProduct", "Observation", "ObservationDefinition",
    "OperationDefinition", "OperationOutcome", "Organization",
    "OrganizationAffiliation", "PackagedProductDefinition", "Parameters", "Patient",
    "PaymentNotice", "PaymentReconciliation", "Person", "PlanDefinition",
    "Practitioner", "PractitionerRole", "Procedure", "Provenance", "Questionnaire",
    "QuestionnaireResponse", "RegulatedAuthorization", "RelatedPerson",
    "RequestGroup", "ResearchDefinition", "ResearchElementDefinition",
    "ResearchStudy", "ResearchSubject", "RiskAssessment", "RiskEvidenceSynthesis",
    "Schedule", "SearchParameter", "ServiceRequest", "Slot", "Specimen",
    "SpecimenDefinition", "StructureDefinition", "StructureMap", "Subscription",
    "SubscriptionStatus", "SubscriptionTopic", "Substance", "SubstanceDefinition",
    "SubstanceNucleicAcid", "SubstancePolymer", "SubstanceProtein",
    "SubstanceReferenceInformation", "SubstanceSourceMaterial",
    "SubstanceSpecification", "SupplyDelivery", "SupplyRequest", "Task",
    "TerminologyCapabilities", "TestReport", "TestScript", "ValueSet",
    "VerificationResult", "VisionPrescription",
};

#[cfg(test)]
mod tests {
    use super::*;

    static PARENT_FIELDS: [FieldDecl; 1] = [FieldDecl::primitive("id", "string", Cardinality::OPTIONAL)];
    static PARENT: TypeDecl = TypeDecl::new("Parent", TypeKind::ComplexType, None, &PARENT_FIELDS);

    static CHILD_FIELDS: [FieldDecl; 2] = [
        FieldDecl::reference("subject", Cardinality::OPTIONAL, &["Patient", "Group"]),
        FieldDecl::primitive("status", "code", Cardinality::REQUIRED).bound(BindingDecl::new(
            "Status",
            BindingStrength::Required,
            "http://example.org/ValueSet/status",
        )),
    ];
    static CHILD: TypeDecl = TypeDecl::new("Child", TypeKind::Resource, Some("Parent"), &CHILD_FIELDS);

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(&PARENT);
        registry.register(&CHILD);
        registry
    }

    #[test]
    fn test_cardinality() {
        assert!(Cardinality::REPEATED.is_array());
        assert!(Cardinality::REPEATED.is_optional());
        assert!(Cardinality::REQUIRED_REPEATED.is_required());
        assert!(!Cardinality::REQUIRED.is_array());
        assert!(!Cardinality::OPTIONAL.is_required());
    }

    #[test]
    fn test_inherited_field_lookup() {
        let registry = registry();

        let names: Vec<_> = registry.fields("Child").iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "subject", "status"]);

        assert_eq!(registry.declaring_type("Child", "id").map(|d| d.name), Some("Parent"));
        assert!(registry.is_required_field("Child", "status"));
        assert!(!registry.is_repeating_field("Child", "subject"));
        assert_eq!(registry.reference_targets("Child", "subject"), &["Patient", "Group"]);
        assert_eq!(
            registry.binding("Child", "status").map(|b| b.strength),
            Some(BindingStrength::Required)
        );
        assert!(registry.field("Child", "missing").is_none());
    }

    #[test]
    fn test_accepts_target() {
        let subject = &CHILD_FIELDS[0];
        assert!(subject.accepts_target("Patient"));
        assert!(subject.accepts_target("Group"));
        assert!(!subject.accepts_target("Practitioner"));

        let any = FieldDecl::reference("focus", Cardinality::OPTIONAL, &["Resource"]);
        assert!(any.accepts_target("Practitioner"));
    }

    #[test]
    fn test_resource_type_names() {
        assert!(is_resource_type("Patient"));
        assert!(is_resource_type("TestScript"));
        assert!(is_resource_type("SubscriptionStatus"));
        assert!(is_resource_type("Citation"));
        assert!(is_resource_type("ClinicalUseDefinition"));
        assert!(is_resource_type("Ingredient"));
        assert!(!is_resource_type("Patients"));
        assert!(!is_resource_type("HumanName"));
        assert_eq!(
            resource_type_from_uri("http://hl7.org/fhir/StructureDefinition/Group"),
            "Group"
        );
        assert_eq!(resource_type_from_uri("Patient"), "Patient");
    }
}
