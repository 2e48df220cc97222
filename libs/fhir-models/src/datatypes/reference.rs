use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::datatypes::{CodeableConcept, IdentifierUse, Period};
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::{Coded, FhirString, Uri};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_one, walk, Visitable, Visitor};

static REFERENCE_FIELDS: [FieldDecl; 4] = [
    Reference::REFERENCE,
    Reference::TYPE,
    Reference::IDENTIFIER,
    Reference::DISPLAY,
];

pub static REFERENCE: TypeDecl =
    TypeDecl::new("Reference", TypeKind::ComplexType, Some("Element"), &REFERENCE_FIELDS);

/// A reference from one resource to another. Never resolved by this crate;
/// only the `type` tag takes part in validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    base: ElementBase,
    reference: Option<FhirString>,
    r#type: Option<Uri>,
    identifier: Option<Identifier>,
    display: Option<FhirString>,
}

impl Reference {
    pub const REFERENCE: FieldDecl = FieldDecl::primitive("reference", "string", Cardinality::OPTIONAL).summary();
    pub const TYPE: FieldDecl = FieldDecl::primitive("type", "uri", Cardinality::OPTIONAL)
        .summary()
        .bound(BindingDecl::new(
            "FHIRResourceTypeExt",
            BindingStrength::Extensible,
            "http://hl7.org/fhir/ValueSet/resource-types",
        ));
    pub const IDENTIFIER: FieldDecl =
        FieldDecl::complex("identifier", "Identifier", Cardinality::OPTIONAL).summary();
    pub const DISPLAY: FieldDecl = FieldDecl::primitive("display", "string", Cardinality::OPTIONAL).summary();

    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            reference: self.reference.clone(),
            r#type: self.r#type.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }

    crate::node_getters! {
        one reference: FhirString;
        one r#type: Uri;
        one identifier: Identifier;
        one display: FhirString;
    }
}

crate::impl_element!(Reference, REFERENCE);

impl Visitable for Reference {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::REFERENCE.name, self.reference.as_ref());
            accept_one(v, Self::TYPE.name, self.r#type.as_ref());
            accept_one(v, Self::IDENTIFIER.name, self.identifier.as_ref());
            accept_one(v, Self::DISPLAY.name, self.display.as_ref());
        });
    }
}

impl Validate for Reference {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    reference: Option<FhirString>,
    r#type: Option<Uri>,
    identifier: Option<Identifier>,
    display: Option<FhirString>,
}

impl ReferenceBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one reference: FhirString;
        one r#type: Uri;
        one identifier: Identifier;
        one display: FhirString;
    }

    pub fn build(self) -> Result<Reference> {
        let node = Reference {
            base: self.base.freeze(),
            reference: self.reference,
            r#type: self.r#type,
            identifier: self.identifier,
            display: self.display,
        };
        finish(node, self.options)
    }
}

static IDENTIFIER_FIELDS: [FieldDecl; 6] = [
    Identifier::USE,
    Identifier::TYPE,
    Identifier::SYSTEM,
    Identifier::VALUE,
    Identifier::PERIOD,
    Identifier::ASSIGNER,
];

pub static IDENTIFIER: TypeDecl =
    TypeDecl::new("Identifier", TypeKind::ComplexType, Some("Element"), &IDENTIFIER_FIELDS);

/// An identifier intended for computation
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    base: ElementBase,
    r#use: Option<Coded<IdentifierUse>>,
    r#type: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub const USE: FieldDecl = FieldDecl::primitive("use", "code", Cardinality::OPTIONAL)
        .modifier()
        .summary()
        .bound(BindingDecl::new(
            "IdentifierUse",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/identifier-use|4.0.1",
        ));
    pub const TYPE: FieldDecl = FieldDecl::complex("type", "CodeableConcept", Cardinality::OPTIONAL)
        .summary()
        .bound(BindingDecl::new(
            "IdentifierType",
            BindingStrength::Extensible,
            "http://hl7.org/fhir/ValueSet/identifier-type",
        ));
    pub const SYSTEM: FieldDecl = FieldDecl::primitive("system", "uri", Cardinality::OPTIONAL).summary();
    pub const VALUE: FieldDecl = FieldDecl::primitive("value", "string", Cardinality::OPTIONAL).summary();
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::OPTIONAL).summary();
    pub const ASSIGNER: FieldDecl =
        FieldDecl::reference("assigner", Cardinality::OPTIONAL, &["Organization"]).summary();

    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            r#use: self.r#use.clone(),
            r#type: self.r#type.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
            assigner: self.assigner.clone(),
        }
    }

    crate::node_getters! {
        one r#use: Coded<IdentifierUse>;
        one r#type: CodeableConcept;
        one system: Uri;
        one value: FhirString;
        one period: Period;
    }

    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_deref()
    }
}

crate::impl_element!(Identifier, IDENTIFIER);

impl Visitable for Identifier {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::USE.name, self.r#use.as_ref());
            accept_one(v, Self::TYPE.name, self.r#type.as_ref());
            accept_one(v, Self::SYSTEM.name, self.system.as_ref());
            accept_one(v, Self::VALUE.name, self.value.as_ref());
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
            accept_one(v, Self::ASSIGNER.name, self.assigner.as_deref());
        });
    }
}

impl Validate for Identifier {
    fn check(&self, c: &Checker) -> Result<()> {
        c.reference(&Self::ASSIGNER, self.assigner.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    r#use: Option<Coded<IdentifierUse>>,
    r#type: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Box<Reference>>,
}

impl IdentifierBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one r#use: Coded<IdentifierUse>;
        one r#type: CodeableConcept;
        one system: Uri;
        one value: FhirString;
        one period: Period;
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.assigner = Some(Box::new(assigner));
        self
    }

    pub fn build(self) -> Result<Identifier> {
        let node = Identifier {
            base: self.base.freeze(),
            r#use: self.r#use,
            r#type: self.r#type,
            system: self.system,
            value: self.value,
            period: self.period,
            assigner: self.assigner,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn typed_reference(resource_type: &str) -> Reference {
        Reference::builder()
            .r#type(Uri::new(resource_type).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_assigner_target_type() {
        let ok = Identifier::builder()
            .value(FhirString::new("12345").unwrap())
            .assigner(typed_reference("Organization"))
            .build();
        assert!(ok.is_ok());

        let err = Identifier::builder()
            .value(FhirString::new("12345").unwrap())
            .assigner(typed_reference("Patient"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidReferenceTargetType { type_name: "Identifier", ref found, .. } if found == "Patient"
        ));
    }

    #[test]
    fn test_assigner_with_absolute_type_uri() {
        let reference = typed_reference("http://hl7.org/fhir/StructureDefinition/Organization");
        let identifier = Identifier::builder().assigner(reference).build();
        assert!(identifier.is_ok());
    }

    #[test]
    fn test_unknown_resource_type_is_rejected() {
        let result = Identifier::builder().assigner(typed_reference("Organisation")).build();
        assert!(matches!(result, Err(Error::InvalidReferenceTargetType { .. })));
    }

    #[test]
    fn test_coded_use() {
        let identifier = Identifier::builder()
            .r#use(IdentifierUse::Official)
            .value(FhirString::new("A-1").unwrap())
            .build()
            .unwrap();
        assert_eq!(identifier.r#use().and_then(|u| u.value()), Some(&IdentifierUse::Official));
    }
}
