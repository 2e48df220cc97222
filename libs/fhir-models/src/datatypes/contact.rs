use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::datatypes::{Coding, ContactPointSystem, ContactPointUse, DataValue, Period};
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::{Coded, FhirString, PositiveInt};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_list, accept_one, walk, Visitable, Visitor};

static CONTACT_POINT_FIELDS: [FieldDecl; 5] = [
    ContactPoint::SYSTEM,
    ContactPoint::VALUE,
    ContactPoint::USE,
    ContactPoint::RANK,
    ContactPoint::PERIOD,
];

pub static CONTACT_POINT: TypeDecl = TypeDecl::new(
    "ContactPoint",
    TypeKind::ComplexType,
    Some("Element"),
    &CONTACT_POINT_FIELDS,
);

/// Details of a technology mediated contact point (phone, fax, email, etc.)
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPoint {
    base: ElementBase,
    system: Option<Coded<ContactPointSystem>>,
    value: Option<FhirString>,
    r#use: Option<Coded<ContactPointUse>>,
    rank: Option<PositiveInt>,
    period: Option<Period>,
}

impl ContactPoint {
    pub const SYSTEM: FieldDecl = FieldDecl::primitive("system", "code", Cardinality::OPTIONAL)
        .summary()
        .bound(BindingDecl::new(
            "ContactPointSystem",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/contact-point-system|4.0.1",
        ));
    pub const VALUE: FieldDecl = FieldDecl::primitive("value", "string", Cardinality::OPTIONAL).summary();
    pub const USE: FieldDecl = FieldDecl::primitive("use", "code", Cardinality::OPTIONAL)
        .modifier()
        .summary()
        .bound(BindingDecl::new(
            "ContactPointUse",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/contact-point-use|4.0.1",
        ));
    pub const RANK: FieldDecl = FieldDecl::primitive("rank", "positiveInt", Cardinality::OPTIONAL).summary();
    pub const PERIOD: FieldDecl = FieldDecl::complex("period", "Period", Cardinality::OPTIONAL).summary();

    pub fn builder() -> ContactPointBuilder {
        ContactPointBuilder::default()
    }

    pub fn to_builder(&self) -> ContactPointBuilder {
        ContactPointBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            system: self.system.clone(),
            value: self.value.clone(),
            r#use: self.r#use.clone(),
            rank: self.rank.clone(),
            period: self.period.clone(),
        }
    }

    crate::node_getters! {
        one system: Coded<ContactPointSystem>;
        one value: FhirString;
        one r#use: Coded<ContactPointUse>;
        one rank: PositiveInt;
        one period: Period;
    }
}

crate::impl_element!(ContactPoint, CONTACT_POINT);

impl Visitable for ContactPoint {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::SYSTEM.name, self.system.as_ref());
            accept_one(v, Self::VALUE.name, self.value.as_ref());
            accept_one(v, Self::USE.name, self.r#use.as_ref());
            accept_one(v, Self::RANK.name, self.rank.as_ref());
            accept_one(v, Self::PERIOD.name, self.period.as_ref());
        });
    }
}

impl Validate for ContactPoint {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    system: Option<Coded<ContactPointSystem>>,
    value: Option<FhirString>,
    r#use: Option<Coded<ContactPointUse>>,
    rank: Option<PositiveInt>,
    period: Option<Period>,
}

impl ContactPointBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one system: Coded<ContactPointSystem>;
        one value: FhirString;
        one r#use: Coded<ContactPointUse>;
        one rank: PositiveInt;
        one period: Period;
    }

    pub fn build(self) -> Result<ContactPoint> {
        let node = ContactPoint {
            base: self.base.freeze(),
            system: self.system,
            value: self.value,
            r#use: self.r#use,
            rank: self.rank,
            period: self.period,
        };
        finish(node, self.options)
    }
}

static CONTACT_DETAIL_FIELDS: [FieldDecl; 2] = [ContactDetail::NAME, ContactDetail::TELECOM];

pub static CONTACT_DETAIL: TypeDecl = TypeDecl::new(
    "ContactDetail",
    TypeKind::ComplexType,
    Some("Element"),
    &CONTACT_DETAIL_FIELDS,
);

/// Contact information
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetail {
    base: ElementBase,
    name: Option<FhirString>,
    telecom: Vec<ContactPoint>,
}

impl ContactDetail {
    pub const NAME: FieldDecl = FieldDecl::primitive("name", "string", Cardinality::OPTIONAL).summary();
    pub const TELECOM: FieldDecl =
        FieldDecl::complex("telecom", "ContactPoint", Cardinality::REPEATED).summary();

    pub fn builder() -> ContactDetailBuilder {
        ContactDetailBuilder::default()
    }

    pub fn to_builder(&self) -> ContactDetailBuilder {
        ContactDetailBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            name: self.name.clone(),
            telecom: self.telecom.to_vec(),
        }
    }

    crate::node_getters! {
        one name: FhirString;
        list telecom: ContactPoint;
    }
}

crate::impl_element!(ContactDetail, CONTACT_DETAIL);

impl Visitable for ContactDetail {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::NAME.name, self.name.as_ref());
            accept_list(v, Self::TELECOM.name, &self.telecom);
        });
    }
}

impl Validate for ContactDetail {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetailBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    name: Option<FhirString>,
    telecom: Vec<ContactPoint>,
}

impl ContactDetailBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one name: FhirString;
        list telecom / replace_telecom: ContactPoint;
    }

    pub fn build(self) -> Result<ContactDetail> {
        let node = ContactDetail {
            base: self.base.freeze(),
            name: self.name,
            telecom: self.telecom,
        };
        finish(node, self.options)
    }
}

static USAGE_CONTEXT_FIELDS: [FieldDecl; 2] = [UsageContext::CODE, UsageContext::VALUE];

pub static USAGE_CONTEXT: TypeDecl = TypeDecl::new(
    "UsageContext",
    TypeKind::ComplexType,
    Some("Element"),
    &USAGE_CONTEXT_FIELDS,
);

/// Describes the context of use for a conformance or knowledge resource
#[derive(Debug, Clone, PartialEq)]
pub struct UsageContext {
    base: ElementBase,
    code: Option<Coding>,
    value: Option<DataValue>,
}

impl UsageContext {
    pub const CODE: FieldDecl = FieldDecl::complex("code", "Coding", Cardinality::REQUIRED)
        .summary()
        .bound(BindingDecl::new(
            "UsageContextType",
            BindingStrength::Extensible,
            "http://hl7.org/fhir/ValueSet/usage-context-type",
        ));
    pub const VALUE: FieldDecl = FieldDecl::choice(
        "value",
        Cardinality::REQUIRED,
        &["CodeableConcept", "Quantity", "Range", "Reference"],
    )
    .targets(&[
        "PlanDefinition",
        "ResearchStudy",
        "InsurancePlan",
        "HealthcareService",
        "Group",
        "Location",
        "Organization",
    ])
    .summary();

    pub fn builder() -> UsageContextBuilder {
        UsageContextBuilder::default()
    }

    pub fn to_builder(&self) -> UsageContextBuilder {
        UsageContextBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            code: self.code.clone(),
            value: self.value.clone(),
        }
    }

    crate::node_getters! {
        one code: Coding;
        one value: DataValue;
    }
}

crate::impl_element!(UsageContext, USAGE_CONTEXT);

impl Visitable for UsageContext {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::CODE.name, self.code.as_ref());
            accept_one(v, Self::VALUE.name, self.value.as_ref());
        });
    }
}

impl Validate for UsageContext {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::CODE, self.code.as_ref())?;
        c.require(&Self::VALUE, self.value.as_ref())?;
        c.choice(&Self::VALUE, self.value.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageContextBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    code: Option<Coding>,
    value: Option<DataValue>,
}

impl UsageContextBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one code: Coding;
        one value: DataValue;
    }

    pub fn build(self) -> Result<UsageContext> {
        let node = UsageContext {
            base: self.base.freeze(),
            code: self.code,
            value: self.value,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{CodeableConcept, Reference};
    use crate::error::Error;
    use crate::primitive::{Code, Uri};

    fn code() -> Coding {
        Coding::builder()
            .system(Uri::new("http://terminology.hl7.org/CodeSystem/usage-context-type").unwrap())
            .code(Code::new("venue").unwrap())
            .build()
            .unwrap()
    }

    fn reference(resource_type: &str) -> Reference {
        Reference::builder()
            .r#type(Uri::new(resource_type).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_value_is_required() {
        let err = UsageContext::builder().code(code()).build().unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { ref path, .. } if path == "value"));
    }

    #[test]
    fn test_value_type_must_be_allowed() {
        let err = UsageContext::builder()
            .code(code())
            .value(FhirString::new("hospital").unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { found: "string", .. }));

        let concept = CodeableConcept::builder()
            .text(FhirString::new("hospital").unwrap())
            .build()
            .unwrap();
        assert!(UsageContext::builder().code(code()).value(concept).build().is_ok());
    }

    #[test]
    fn test_reference_value_is_target_checked() {
        assert!(UsageContext::builder()
            .code(code())
            .value(reference("Location"))
            .build()
            .is_ok());

        let err = UsageContext::builder()
            .code(code())
            .value(reference("Patient"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceTargetType { .. }));
    }

    #[test]
    fn test_contact_detail_telecom() {
        let phone = ContactPoint::builder()
            .system(ContactPointSystem::Phone)
            .value(FhirString::new("+1 555 0100").unwrap())
            .rank(PositiveInt::new(1).unwrap())
            .build()
            .unwrap();
        let detail = ContactDetail::builder()
            .name(FhirString::new("Help desk").unwrap())
            .telecom([phone])
            .build()
            .unwrap();
        assert_eq!(detail.telecom().len(), 1);
    }
}
