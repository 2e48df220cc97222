use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::{Boolean, Code, FhirString, Uri};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_list, accept_one, walk, Visitable, Visitor};

static CODING_FIELDS: [FieldDecl; 5] = [
    Coding::SYSTEM,
    Coding::VERSION,
    Coding::CODE,
    Coding::DISPLAY,
    Coding::USER_SELECTED,
];

pub static CODING: TypeDecl = TypeDecl::new("Coding", TypeKind::ComplexType, Some("Element"), &CODING_FIELDS);

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq)]
pub struct Coding {
    base: ElementBase,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl Coding {
    pub const SYSTEM: FieldDecl = FieldDecl::primitive("system", "uri", Cardinality::OPTIONAL).summary();
    pub const VERSION: FieldDecl = FieldDecl::primitive("version", "string", Cardinality::OPTIONAL).summary();
    pub const CODE: FieldDecl = FieldDecl::primitive("code", "code", Cardinality::OPTIONAL).summary();
    pub const DISPLAY: FieldDecl = FieldDecl::primitive("display", "string", Cardinality::OPTIONAL).summary();
    pub const USER_SELECTED: FieldDecl =
        FieldDecl::primitive("userSelected", "boolean", Cardinality::OPTIONAL).summary();

    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }

    crate::node_getters! {
        one system: Uri;
        one version: FhirString;
        one code: Code;
        one display: FhirString;
        one user_selected: Boolean;
    }
}

crate::impl_element!(Coding, CODING);

impl Visitable for Coding {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::SYSTEM.name, self.system.as_ref());
            accept_one(v, Self::VERSION.name, self.version.as_ref());
            accept_one(v, Self::CODE.name, self.code.as_ref());
            accept_one(v, Self::DISPLAY.name, self.display.as_ref());
            accept_one(v, Self::USER_SELECTED.name, self.user_selected.as_ref());
        });
    }
}

impl Validate for Coding {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl CodingBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one system: Uri;
        one version: FhirString;
        one code: Code;
        one display: FhirString;
        one user_selected: Boolean;
    }

    pub fn build(self) -> Result<Coding> {
        let node = Coding {
            base: self.base.freeze(),
            system: self.system,
            version: self.version,
            code: self.code,
            display: self.display,
            user_selected: self.user_selected,
        };
        finish(node, self.options)
    }
}

static CODEABLE_CONCEPT_FIELDS: [FieldDecl; 2] = [CodeableConcept::CODING, CodeableConcept::TEXT];

pub static CODEABLE_CONCEPT: TypeDecl = TypeDecl::new(
    "CodeableConcept",
    TypeKind::ComplexType,
    Some("Element"),
    &CODEABLE_CONCEPT_FIELDS,
);

/// Concept, possibly coded in several systems, with an optional text rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CodeableConcept {
    base: ElementBase,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConcept {
    pub const CODING: FieldDecl = FieldDecl::complex("coding", "Coding", Cardinality::REPEATED).summary();
    pub const TEXT: FieldDecl = FieldDecl::primitive("text", "string", Cardinality::OPTIONAL).summary();

    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            coding: self.coding.to_vec(),
            text: self.text.clone(),
        }
    }

    crate::node_getters! {
        list coding: Coding;
        one text: FhirString;
    }
}

crate::impl_element!(CodeableConcept, CODEABLE_CONCEPT);

impl Visitable for CodeableConcept {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_list(v, Self::CODING.name, &self.coding);
            accept_one(v, Self::TEXT.name, self.text.as_ref());
        });
    }
}

impl Validate for CodeableConcept {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConceptBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        list coding / replace_coding: Coding;
        one text: FhirString;
    }

    pub fn build(self) -> Result<CodeableConcept> {
        let node = CodeableConcept {
            base: self.base.freeze(),
            coding: self.coding,
            text: self.text,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_coding_is_rejected() {
        assert!(matches!(
            Coding::builder().build(),
            Err(Error::EmptyComposite { type_name: "Coding" })
        ));
    }

    #[test]
    fn test_id_alone_does_not_count() {
        assert!(matches!(
            CodeableConcept::builder().id("cc1").build(),
            Err(Error::EmptyComposite { .. })
        ));
    }

    #[test]
    fn test_to_builder_round_trip() {
        let coding = Coding::builder()
            .system(Uri::new("http://loinc.org").unwrap())
            .code(Code::new("8867-4").unwrap())
            .user_selected(true)
            .build()
            .unwrap();
        let concept = CodeableConcept::builder()
            .coding([coding.clone()])
            .text(FhirString::new("Heart rate").unwrap())
            .build()
            .unwrap();

        let rebuilt = concept.to_builder().build().unwrap();
        assert_eq!(rebuilt, concept);

        let extended = concept.to_builder().coding([coding]).build().unwrap();
        assert_eq!(extended.coding().len(), 2);
        assert_eq!(concept.coding().len(), 1);
    }
}
