use crate::builder::ElementBuilder;
use crate::config::BuildOptions;
use crate::datatypes::{Coding, NarrativeStatus};
use crate::error::Result;
use crate::node::ElementBase;
use crate::primitive::{Canonical, Coded, Id, Instant, Uri, Xhtml};
use crate::rules::{finish, Checker, Validate};
use crate::schema::{BindingDecl, BindingStrength, Cardinality, FieldDecl, TypeDecl, TypeKind};
use crate::visitor::{accept_list, accept_one, walk, Visitable, Visitor};

static NARRATIVE_FIELDS: [FieldDecl; 2] = [Narrative::STATUS, Narrative::DIV];

pub static NARRATIVE: TypeDecl =
    TypeDecl::new("Narrative", TypeKind::ComplexType, Some("Element"), &NARRATIVE_FIELDS);

/// Human-readable summary of a resource
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    base: ElementBase,
    status: Option<Coded<NarrativeStatus>>,
    div: Option<Xhtml>,
}

impl Narrative {
    pub const STATUS: FieldDecl = FieldDecl::primitive("status", "code", Cardinality::REQUIRED).bound(
        BindingDecl::new(
            "NarrativeStatus",
            BindingStrength::Required,
            "http://hl7.org/fhir/ValueSet/narrative-status|4.0.1",
        ),
    );
    pub const DIV: FieldDecl = FieldDecl::primitive("div", "xhtml", Cardinality::REQUIRED);

    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            status: self.status.clone(),
            div: self.div.clone(),
        }
    }

    crate::node_getters! {
        one status: Coded<NarrativeStatus>;
        one div: Xhtml;
    }
}

crate::impl_element!(Narrative, NARRATIVE);

impl Visitable for Narrative {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::STATUS.name, self.status.as_ref());
            accept_one(v, Self::DIV.name, self.div.as_ref());
        });
    }
}

impl Validate for Narrative {
    fn check(&self, c: &Checker) -> Result<()> {
        c.require(&Self::STATUS, self.status.as_ref())?;
        c.require(&Self::DIV, self.div.as_ref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    status: Option<Coded<NarrativeStatus>>,
    div: Option<Xhtml>,
}

impl NarrativeBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one status: Coded<NarrativeStatus>;
        one div: Xhtml;
    }

    pub fn build(self) -> Result<Narrative> {
        let node = Narrative {
            base: self.base.freeze(),
            status: self.status,
            div: self.div,
        };
        finish(node, self.options)
    }
}

static META_FIELDS: [FieldDecl; 6] = [
    Meta::VERSION_ID,
    Meta::LAST_UPDATED,
    Meta::SOURCE,
    Meta::PROFILE,
    Meta::SECURITY,
    Meta::TAG,
];

pub static META: TypeDecl = TypeDecl::new("Meta", TypeKind::ComplexType, Some("Element"), &META_FIELDS);

/// Metadata about a resource
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    base: ElementBase,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Canonical>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl Meta {
    pub const VERSION_ID: FieldDecl = FieldDecl::primitive("versionId", "id", Cardinality::OPTIONAL).summary();
    pub const LAST_UPDATED: FieldDecl =
        FieldDecl::primitive("lastUpdated", "instant", Cardinality::OPTIONAL).summary();
    pub const SOURCE: FieldDecl = FieldDecl::primitive("source", "uri", Cardinality::OPTIONAL).summary();
    pub const PROFILE: FieldDecl =
        FieldDecl::primitive("profile", "canonical", Cardinality::REPEATED).summary();
    pub const SECURITY: FieldDecl = FieldDecl::complex("security", "Coding", Cardinality::REPEATED)
        .summary()
        .bound(BindingDecl::new(
            "SecurityLabels",
            BindingStrength::Extensible,
            "http://hl7.org/fhir/ValueSet/security-labels",
        ));
    pub const TAG: FieldDecl = FieldDecl::complex("tag", "Coding", Cardinality::REPEATED)
        .summary()
        .bound(BindingDecl::new(
            "Tags",
            BindingStrength::Example,
            "http://hl7.org/fhir/ValueSet/common-tags",
        ));

    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            base: ElementBuilder::from_base(&self.base),
            options: BuildOptions::default(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            source: self.source.clone(),
            profile: self.profile.to_vec(),
            security: self.security.to_vec(),
            tag: self.tag.to_vec(),
        }
    }

    crate::node_getters! {
        one version_id: Id;
        one last_updated: Instant;
        one source: Uri;
        list profile: Canonical;
        list security: Coding;
        list tag: Coding;
    }
}

crate::impl_element!(Meta, META);

impl Visitable for Meta {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        walk(self, name, index, visitor, |v| {
            self.base.accept_children(v);
            accept_one(v, Self::VERSION_ID.name, self.version_id.as_ref());
            accept_one(v, Self::LAST_UPDATED.name, self.last_updated.as_ref());
            accept_one(v, Self::SOURCE.name, self.source.as_ref());
            accept_list(v, Self::PROFILE.name, &self.profile);
            accept_list(v, Self::SECURITY.name, &self.security);
            accept_list(v, Self::TAG.name, &self.tag);
        });
    }
}

impl Validate for Meta {
    fn check(&self, _c: &Checker) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetaBuilder {
    base: ElementBuilder,
    options: BuildOptions,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Canonical>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl MetaBuilder {
    crate::element_builder_methods!();

    crate::builder_setters! {
        one version_id: Id;
        one last_updated: Instant;
        one source: Uri;
        list profile / replace_profile: Canonical;
        list security / replace_security: Coding;
        list tag / replace_tag: Coding;
    }

    pub fn build(self) -> Result<Meta> {
        let node = Meta {
            base: self.base.freeze(),
            version_id: self.version_id,
            last_updated: self.last_updated,
            source: self.source,
            profile: self.profile,
            security: self.security,
            tag: self.tag,
        };
        finish(node, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_narrative_requires_status_and_div() {
        let err = Narrative::builder()
            .div(Xhtml::new("<div xmlns=\"http://www.w3.org/1999/xhtml\">Hi</div>").unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { type_name: "Narrative", ref path } if path == "status"));

        let narrative = Narrative::builder()
            .status(NarrativeStatus::Generated)
            .div(Xhtml::new("<div xmlns=\"http://www.w3.org/1999/xhtml\">Hi</div>").unwrap())
            .build();
        assert!(narrative.is_ok());
    }

    #[test]
    fn test_meta_lists() {
        let meta = Meta::builder()
            .version_id(Id::new("3").unwrap())
            .profile([Canonical::new("http://example.org/StructureDefinition/enc").unwrap()])
            .build()
            .unwrap();
        assert_eq!(meta.profile().len(), 1);
        assert!(meta.security().is_empty());
    }
}
